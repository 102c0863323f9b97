//! In-memory cache storage with time-based expiry
//!
//! Entries expire a fixed time after insertion. When the store is full,
//! expired entries are purged first and then the oldest insertion is evicted.
//! Reads do not refresh an entry.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of the current time, injectable for tests
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock backed by `Instant::now`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct CacheEntry {
    value: Value,
    inserted_at: Instant,
}

/// Bounded, time-expiring store of parsed responses
pub struct CacheStorage {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
    capacity: usize,
    clock: Arc<dyn Clock>,
}

impl CacheStorage {
    /// Create a store using the wall clock
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self::with_clock(ttl, capacity, Arc::new(SystemClock))
    }

    /// Create a store reading time from `clock`
    pub fn with_clock(ttl: Duration, capacity: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            capacity,
            clock,
        }
    }

    fn is_expired(&self, entry: &CacheEntry, now: Instant) -> bool {
        now.saturating_duration_since(entry.inserted_at) >= self.ttl
    }

    /// Get cached data if still valid; expired entries are dropped on sight
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let now = self.clock.now();
        let expired = match self.entries.get(key) {
            Some(entry) if !self.is_expired(entry, now) => return Some(entry.value.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            log::debug!("Cache entry expired: {}", key);
            self.entries.remove(key);
        }
        None
    }

    /// Store data, evicting as needed to stay within capacity
    pub fn put(&mut self, key: &str, value: Value) {
        if self.capacity == 0 {
            return;
        }

        if !self.entries.contains_key(key) && self.entries.len() >= self.capacity {
            self.purge_expired();
            if self.entries.len() >= self.capacity {
                self.evict_oldest();
            }
        }

        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                inserted_at: self.clock.now(),
            },
        );
    }

    /// Remove every expired entry, returning how many were removed
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now();
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.inserted_at) < ttl);
        before - self.entries.len()
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.inserted_at)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            log::debug!("Cache full, evicting {}", key);
            self.entries.remove(&key);
        }
    }

    /// Number of stored entries, expired or not
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
