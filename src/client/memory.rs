use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

use crate::client::{RemoteStore, StoreError, StoreResult};

/// In-process stand-in for the realtime database.
///
/// Values live in a map keyed by node path. Two knobs let callers reproduce
/// network conditions without a server:
///
/// - `set_offline(true)` makes every request fail with `StoreError::Unreachable`.
/// - `set_latency(d)` delays every GET response by `d`. The value is read when
///   the request arrives, so a write landing during the delay is not seen by
///   the pending read.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, Value>>,
    offline: AtomicBool,
    latency_ms: AtomicU64,
    puts: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, path: &str, value: Value) {
        self.values.write().await.insert(path.to_string(), value);
    }

    pub async fn value(&self, path: &str) -> Option<Value> {
        self.values.read().await.get(path).cloned()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn set_latency(&self, latency: Duration) {
        self.latency_ms
            .store(latency.as_millis() as u64, Ordering::SeqCst);
    }

    /// Number of successful writes so far.
    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn get(&self, path: &str) -> StoreResult<Value> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unreachable);
        }

        let snapshot = self
            .values
            .read()
            .await
            .get(path)
            .cloned()
            .unwrap_or(Value::Null);

        let latency = self.latency_ms.load(Ordering::SeqCst);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }

        Ok(snapshot)
    }

    async fn put(&self, path: &str, value: &Value) -> StoreResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unreachable);
        }

        self.values
            .write()
            .await
            .insert(path.to_string(), value.clone());
        self.puts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
