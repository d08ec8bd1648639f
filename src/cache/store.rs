//! Cache Store Module
//!
//! HashMap-backed store with lazy TTL invalidation: stale entries stay in
//! the map until overwritten or cleared, they are just never served.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, info};

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Request-fingerprint keyed store with a single TTL for every entry.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Usage statistics
    stats: CacheStats,
    /// How long an entry may be served after it was written
    ttl: Duration,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store whose entries are served for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == Get ==
    /// Returns a copy of the payload if present and younger than the TTL.
    ///
    /// A stale entry behaves exactly like a missing one and is left in place.
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if entry.is_fresh(self.ttl) => {
                self.stats.record_hit();
                debug!(key, "Cache hit");
                Some(entry.payload.clone())
            }
            Some(_) => {
                self.stats.record_miss();
                debug!(key, "Cache entry stale");
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores the payload stamped with the current time, replacing any prior entry.
    pub fn set(&mut self, key: impl Into<String>, payload: V) {
        let key = key.into();
        info!(key = %key, "Caching data");
        self.entries.insert(key, CacheEntry::new(payload));
        self.stats.record_write();
        self.stats.set_total_entries(self.entries.len());
    }

    // == Clear ==
    /// Drops every entry regardless of age.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.stats.record_clear();
        self.stats.set_total_entries(0);
        info!(removed, "Cache cleared");
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
