//! Cache Statistics Module
//!
//! Tracks scan hits, misses, and sweep removals.

use serde::Serialize;

// == Cache Stats ==
/// Performance counters for the banner cache.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful (tag, feature) scan lookups
    pub hits: u64,
    /// Number of scan lookups that found no matching entry
    pub misses: u64,
    /// Total entries removed by the background sweep
    pub swept: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_swept(&mut self, count: usize) {
        self.swept += count as u64;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
