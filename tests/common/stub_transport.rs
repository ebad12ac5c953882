//! In-memory transport with call recording and scripted failures.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

use storefront::api::{ApiError, Transport};

/// A request seen by the stub.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl RecordedCall {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_full_fetch(&self) -> bool {
        self.query.is_empty()
    }
}

/// Serves collections from memory.
///
/// - `GET /coll` returns the whole collection (capped by `full_fetch_cap`)
/// - `GET /coll?limit&offset` returns the slice (unless `ignore_paging`)
/// - `GET /coll/{id}` returns the record or a 404
#[derive(Default)]
pub struct StubTransport {
    collections: Mutex<HashMap<String, Vec<Value>>>,
    calls: Mutex<Vec<RecordedCall>>,
    fail_next: Mutex<u32>,
    fail_paged: Mutex<bool>,
    full_fetch_cap: Mutex<Option<usize>>,
    ignore_paging: Mutex<bool>,
    delays: Mutex<HashMap<u64, Duration>>,
    full_fetch_delay: Mutex<Option<Duration>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(self, path: &str, items: Vec<Value>) -> Self {
        self.collections.lock().insert(path.to_string(), items);
        self
    }

    /// Fail the next `count` requests with a 500.
    pub fn fail_next(&self, count: u32) {
        *self.fail_next.lock() = count;
    }

    /// Fail every request carrying `limit`/`offset`.
    pub fn fail_paged_requests(&self, fail: bool) {
        *self.fail_paged.lock() = fail;
    }

    /// Return at most `cap` items from unparameterized collection fetches.
    pub fn cap_full_fetch(&self, cap: usize) {
        *self.full_fetch_cap.lock() = Some(cap);
    }

    /// Return the whole collection even when `limit`/`offset` are given.
    pub fn ignore_paging(&self) {
        *self.ignore_paging.lock() = true;
    }

    /// Delay paged requests with the given offset.
    pub fn delay_offset(&self, offset: u64, delay: Duration) {
        self.delays.lock().insert(offset, delay);
    }

    pub fn delay_full_fetch(&self, delay: Duration) {
        *self.full_fetch_delay.lock() = Some(delay);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn full_fetches(&self, path: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.path == path && call.is_full_fetch())
            .count()
    }

    pub fn paged_fetches(&self, path: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.path == path && !call.is_full_fetch())
            .count()
    }

    fn take_failure(&self) -> bool {
        let mut remaining = self.fail_next.lock();
        if *remaining > 0 {
            *remaining -= 1;
            true
        } else {
            false
        }
    }

    fn respond(&self, call: &RecordedCall) -> Result<Value, ApiError> {
        let collections = self.collections.lock();

        if let Some(items) = collections.get(&call.path) {
            if call.is_full_fetch() {
                let cap = (*self.full_fetch_cap.lock()).unwrap_or(items.len());
                return Ok(Value::Array(items.iter().take(cap).cloned().collect()));
            }
            if *self.ignore_paging.lock() {
                return Ok(Value::Array(items.clone()));
            }
            let limit: usize = call.param("limit").and_then(|v| v.parse().ok()).unwrap_or(items.len());
            let offset: usize = call.param("offset").and_then(|v| v.parse().ok()).unwrap_or(0);
            return Ok(Value::Array(
                items.iter().skip(offset).take(limit).cloned().collect(),
            ));
        }

        if let Some((collection, id)) = call.path.rsplit_once('/') {
            if let Some(items) = collections.get(collection) {
                let found = items.iter().find(|item| match &item["id"] {
                    Value::Number(n) => n.to_string() == id,
                    Value::String(s) => s == id,
                    _ => false,
                });
                if let Some(item) = found {
                    return Ok(item.clone());
                }
            }
        }

        Err(ApiError::Status {
            status: 404,
            message: format!("{} not found", call.path),
        })
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        let call = RecordedCall {
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        };
        self.calls.lock().push(call.clone());

        let delay = if call.is_full_fetch() {
            *self.full_fetch_delay.lock()
        } else {
            call.param("offset")
                .and_then(|v| v.parse::<u64>().ok())
                .and_then(|offset| self.delays.lock().get(&offset).copied())
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.take_failure() {
            return Err(ApiError::Status {
                status: 500,
                message: "scripted failure".to_string(),
            });
        }
        if !call.is_full_fetch() && *self.fail_paged.lock() {
            return Err(ApiError::Status {
                status: 400,
                message: "paging not supported".to_string(),
            });
        }

        self.respond(&call)
    }
}
