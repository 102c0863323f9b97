//! Cached wrapper for the Moodle API client
//!
//! Provides transparent memoization of web-service responses.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

use crate::cache::{CacheLimits, CacheStorage, cache_key};
use crate::client::{MoodleApi, ServiceCall};
use crate::error::Result;

/// Cached wrapper for any MoodleApi implementation.
///
/// Cache can be disabled via the `enabled` flag (for `--no-cache`).
/// The storage is wrapped in a Mutex so the wrapper stays `Sync`.
pub struct CachedMoodleClient<C: MoodleApi> {
    inner: C,
    cache: Option<Mutex<CacheStorage>>,
}

impl<C: MoodleApi> CachedMoodleClient<C> {
    /// Create a new cached client wrapper.
    ///
    /// # Arguments
    /// * `inner` - The underlying API client to wrap
    /// * `enabled` - Whether caching is enabled (false for --no-cache)
    pub fn new(inner: C, enabled: bool) -> Self {
        let storage = CacheStorage::new(CacheLimits::TTL, CacheLimits::CAPACITY);
        Self::with_storage(inner, enabled.then_some(storage))
    }

    /// Wrap `inner` with an explicit storage (or none)
    pub fn with_storage(inner: C, storage: Option<CacheStorage>) -> Self {
        Self {
            inner,
            cache: storage.map(Mutex::new),
        }
    }

    fn get_cached(&self, key: &str) -> Option<Value> {
        let cache = self.cache.as_ref()?;
        let mut guard = cache.lock().ok()?;
        guard.get(key)
    }

    fn set_cached(&self, key: &str, data: &Value) {
        if let Some(ref cache) = self.cache
            && let Ok(mut guard) = cache.lock()
        {
            guard.put(key, data.clone());
        }
    }
}

#[async_trait]
impl<C: MoodleApi> MoodleApi for CachedMoodleClient<C> {
    async fn call(&self, call: &ServiceCall) -> Result<Value> {
        let key = cache_key(call);

        if let Some(cached) = self.get_cached(&key) {
            log::debug!("Cache hit: {}", call.function);
            return Ok(cached);
        }

        log::debug!("Cache miss: {}", call.function);
        let result = self.inner.call(call).await?;
        self.set_cached(&key, &result);
        Ok(result)
    }
}
