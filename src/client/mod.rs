//! Access to the remote realtime database.
//!
//! The store is a hierarchical key-value tree addressed by path, where every
//! node is read and written as a JSON document at `{base}{path}.json`. Only
//! plain GET and PUT are used; there is no authentication, no retry and no
//! concurrency control.

pub mod memory;
pub mod realtime_db;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use memory::MemoryStore;
pub use realtime_db::RealtimeDb;

/// Node holding the latest sensor reading, written by the field device.
pub const SENSOR_PATH: &str = "/sensor";

/// Node holding the relay flag, shared between this client and the device.
pub const ACTUATOR_PATH: &str = "/atuador/estado";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("store unreachable")]
    Unreachable,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Read the JSON value stored at `path`. A node that was never written
    /// reads as `Value::Null`.
    async fn get(&self, path: &str) -> StoreResult<Value>;

    /// Replace the JSON value stored at `path`.
    async fn put(&self, path: &str, value: &Value) -> StoreResult<()>;
}
