//! Local cache for web-service responses
//!
//! Keeps recent responses in memory so repeated keystrokes within a short
//! window do not hit the Moodle site again.

pub mod client;
pub mod key;
pub mod storage;

use std::time::Duration;

/// Cache sizing
pub struct CacheLimits;

impl CacheLimits {
    /// Entries expire this long after insertion
    pub const TTL: Duration = Duration::from_secs(60);

    /// Maximum number of distinct calls held at once
    pub const CAPACITY: usize = 100;
}

// Re-export main types
pub use client::CachedMoodleClient;
pub use key::cache_key;
pub use storage::CacheStorage;
