//! Persistent Store Port
//!
//! The authoritative banner store behind the cache. The service depends on
//! this trait only, so tests can substitute an in-memory double and the
//! embedded implementation stays swappable.

mod sled_repo;

pub use sled_repo::SledBannerRepo;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Banner, BannerUpdate, CreateBannerRequest};

/// Optional filters for the admin listing.
#[derive(Debug, Clone, Default)]
pub struct BannerFilter {
    pub tag_id: Option<i16>,
    pub feature_id: Option<i16>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

// == Banner Repo ==
/// Authoritative store for banners.
///
/// `find_by_tag_feature` returns matching banners regardless of
/// `is_active`; the visibility rule is applied by the service so the admin
/// preview path can still see inactive content.
#[async_trait]
pub trait BannerRepo: Send + Sync {
    /// Finds the banner serving a (tag, feature) probe.
    ///
    /// When several banners match, the most-recently-updated one wins, the
    /// same tie-break the cache scan applies. `Ok(None)` is a normal miss,
    /// not a fault.
    async fn find_by_tag_feature(&self, tag_id: i16, feature_id: i16)
        -> Result<Option<Banner>>;

    /// Lists banners with optional tag/feature filters and paging.
    async fn list(&self, filter: &BannerFilter) -> Result<Vec<Banner>>;

    /// Inserts a new banner, assigning its identity and timestamps.
    async fn create(&self, draft: &CreateBannerRequest) -> Result<Banner>;

    /// Applies a partial field update; errors with NotFound when the id
    /// does not exist.
    async fn update(&self, id: i64, update: &BannerUpdate) -> Result<()>;

    /// Deletes a banner; returns whether a row was actually removed.
    async fn delete(&self, id: i64) -> Result<bool>;
}
