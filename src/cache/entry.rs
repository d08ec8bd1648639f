//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and their freshness check.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A stored payload plus the time it was written.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored payload
    pub payload: V,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(payload: V) -> Self {
        Self {
            payload,
            created_at: current_timestamp_ms(),
        }
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was written.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.created_at)
    }

    // == Is Fresh ==
    /// Checks whether the entry may still be served.
    ///
    /// Boundary condition: an entry whose age equals the TTL is already
    /// stale, so it is readable only while `age < ttl`.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        (self.age_ms() as u128) < ttl.as_millis()
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
