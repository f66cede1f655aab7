//! Banner Cache Module
//!
//! In-process TTL store for banners, keyed by store-assigned identity, with
//! a secondary scan access path by (tag, feature).
//!
//! The struct owns the entry map and is constructed once at startup; callers
//! share it as `Arc<RwLock<BannerCache>>`. Every operation that refreshes an
//! expiration mutates state, so the scan lookup is named `touch_and_get` and
//! takes `&mut self` rather than posing as a read.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;

use crate::cache::{CacheEntry, CacheStats};
use crate::models::{Banner, BannerUpdate};

// == Banner Cache ==
/// TTL-expiring banner cache.
///
/// Entry count is unbounded; eviction is time-based only, performed by the
/// periodic [`sweep`](BannerCache::sweep). An entry whose TTL has elapsed
/// stays visible to `touch_and_get` until the next sweep removes it.
#[derive(Debug)]
pub struct BannerCache {
    /// Banner id -> cached entry
    entries: HashMap<i64, CacheEntry>,
    /// Fixed TTL applied on insert and on every refresh
    ttl: Duration,
    /// Scan and sweep counters
    stats: CacheStats,
}

impl BannerCache {
    // == Constructor ==
    /// Creates an empty cache with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == Upsert ==
    /// Unconditionally inserts or replaces the entry for `banner.id`,
    /// setting its expiration a full TTL out.
    ///
    /// Never fails; concurrent callers racing on the same id converge to
    /// last-writer-wins under the outer lock.
    pub fn upsert(&mut self, banner: Banner) {
        let entry = CacheEntry::new(banner, self.ttl);
        self.entries.insert(entry.banner.id, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Patch ==
    /// Applies a partial field update to an existing entry and refreshes its
    /// expiration.
    ///
    /// A silent no-op when no entry exists for `id`: updates only refresh a
    /// banner the cache already holds, they never populate it from scratch.
    pub fn patch(&mut self, id: i64, update: &BannerUpdate) {
        if let Some(entry) = self.entries.get_mut(&id) {
            update.apply(&mut entry.banner);
            // Mirror the store's updated_at bump so the scan tie-break
            // agrees with the persistent state.
            entry.banner.updated_at = Utc::now();
            entry.touch(self.ttl);
        }
    }

    // == Touch And Get ==
    /// Scans all entries for a banner whose tag set contains `tag_id` and
    /// whose feature matches, refreshes the winner's expiration, and returns
    /// a clone of it.
    ///
    /// The scan does not filter on expiry; an expired-but-unswept entry can
    /// still hit (and is revived by the refresh). When several banners match
    /// the probe, the most-recently-updated one wins; equal timestamps break
    /// toward the higher id.
    pub fn touch_and_get(&mut self, tag_id: i16, feature_id: i16) -> Option<Banner> {
        let winner = self
            .entries
            .values()
            .filter(|e| e.banner.matches(tag_id, feature_id))
            .max_by_key(|e| (e.banner.updated_at, e.banner.id))
            .map(|e| e.banner.id);

        let ttl = self.ttl;
        if let Some(entry) = winner.and_then(|id| self.entries.get_mut(&id)) {
            entry.touch(ttl);
            let banner = entry.banner.clone();
            self.stats.record_hit();
            return Some(banner);
        }

        self.stats.record_miss();
        None
    }

    // == Remove ==
    /// Removes the entry for `id`, if present.
    ///
    /// Called on banner deletion so a deleted banner is never served from
    /// cache while waiting for its TTL to lapse.
    pub fn remove(&mut self, id: i64) -> bool {
        let removed = self.entries.remove(&id).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Sweep ==
    /// Removes every entry whose expiration is at or before now.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();

        self.stats.record_swept(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts a pre-built entry, bypassing the TTL stamp. Lets tests plant
    /// entries with an already-elapsed expiration.
    #[cfg(test)]
    pub(crate) fn insert_entry(&mut self, entry: CacheEntry) {
        self.entries.insert(entry.banner.id, entry);
        self.stats.set_total_entries(self.entries.len());
    }
}
