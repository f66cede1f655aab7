//! Cache Entry Module
//!
//! Wraps a banner with an absolute expiration instant. Expiration is
//! sliding: any qualifying access pushes `expires_at` out by the full TTL.

use std::time::{Duration, Instant};

use crate::models::Banner;

// == Cache Entry ==
/// A single cached banner with its expiration time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached banner
    pub banner: Banner,
    /// Absolute expiration instant
    pub expires_at: Instant,
}

impl CacheEntry {
    /// Creates an entry expiring a full TTL from now.
    pub fn new(banner: Banner, ttl: Duration) -> Self {
        Self {
            banner,
            expires_at: Instant::now() + ttl,
        }
    }

    /// Resets the expiration to now + TTL.
    ///
    /// Called on every qualifying access (scan hit, upsert, patch), which
    /// is what makes the expiration sliding rather than fixed.
    pub fn touch(&mut self, ttl: Duration) {
        self.expires_at = Instant::now() + ttl;
    }

    /// Whether the entry's TTL has fully elapsed.
    ///
    /// Expiry is enforced only by the periodic sweep; an expired entry is
    /// still visible to scans until the sweep removes it.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}
