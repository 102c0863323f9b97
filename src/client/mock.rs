//! Mock Moodle client for testing
//!
//! Provides a mock implementation of the API trait for unit testing
//! without making real HTTP calls.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{MoodleApi, ServiceCall};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockMoodleClient::new()
///     .with_response(FN_UPCOMING_EVENTS, json!({"events": []}));
/// ```
#[derive(Clone, Default)]
pub struct MockMoodleClient {
    /// Canned JSON bodies keyed by web-service function name
    responses: Arc<Mutex<HashMap<String, Value>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Every call received, in order
    captured: Arc<Mutex<Vec<ServiceCall>>>,
}

impl MockMoodleClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `body` for every call to `function`
    pub fn with_response(self, function: &str, body: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(function.to_string(), body);
        self
    }

    /// Fail the next call with `error`
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().unwrap() = Some(error);
        self
    }

    /// Number of calls received so far
    pub fn call_count(&self) -> usize {
        self.captured.lock().unwrap().len()
    }

    /// Calls received so far
    pub fn captured(&self) -> Vec<ServiceCall> {
        self.captured.lock().unwrap().clone()
    }
}

#[async_trait]
impl MoodleApi for MockMoodleClient {
    async fn call(&self, call: &ServiceCall) -> Result<Value> {
        self.captured.lock().unwrap().push(call.clone());

        if let Some(err) = self.error.lock().unwrap().take() {
            return Err(err.into());
        }

        self.responses
            .lock()
            .unwrap()
            .get(&call.function)
            .cloned()
            .ok_or_else(|| {
                ApiError::InvalidResponse(format!("no mock response for {}", call.function)).into()
            })
    }
}
