use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::time::Instant;

use crate::client::{RemoteStore, StoreError, StoreResult};

/// HTTPS client for a realtime database REST endpoint.
///
/// `base_url` is the database origin plus the application root, for example
/// `https://example-default-rtdb.firebaseio.com/irrigacao`. A node at path
/// `/sensor` is then served from `{base_url}/sensor.json`.
///
/// No request timeout is configured; a stalled request stays pending for as
/// long as the HTTP stack allows.
pub struct RealtimeDb {
    http: reqwest::Client,
    base_url: String,
}

impl RealtimeDb {
    pub fn new(base_url: impl Into<String>) -> StoreResult<Self> {
        let http = reqwest::Client::builder().build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `path` must start with `/`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}.json", self.base_url, path)
    }
}

#[async_trait]
impl RemoteStore for RealtimeDb {
    async fn get(&self, path: &str) -> StoreResult<Value> {
        let start = Instant::now();
        let url = self.url_for(path);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        debug!("[GET] {} -> HTTP {}", url, status.as_u16());

        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        let value = serde_json::from_slice(&body)?;
        debug!("GET {} took: {} ms", path, start.elapsed().as_millis());
        Ok(value)
    }

    async fn put(&self, path: &str, value: &Value) -> StoreResult<()> {
        let start = Instant::now();
        let url = self.url_for(path);
        let body = serde_json::to_vec(value)?;

        let response = self
            .http
            .put(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let status = response.status();
        debug!("[PUT] {} -> HTTP {}", url, status.as_u16());

        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                url,
            });
        }

        debug!("PUT {} took: {} ms", path, start.elapsed().as_millis());
        Ok(())
    }
}
