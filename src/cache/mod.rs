//! Cache Module
//!
//! In-process TTL cache for banners: sliding expiration, periodic sweep,
//! (tag, feature) scan lookup. No size bound and no LRU; entries leave only
//! by expiring or by explicit invalidation.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::BannerCache;
