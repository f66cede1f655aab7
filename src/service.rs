//! Banner Service
//!
//! Cache-aside orchestration between the persistent store and the TTL
//! cache, plus the role-based visibility rule.
//!
//! Reads consult the cache unless the caller forces a fresh read; misses
//! fall through to the store and repopulate the cache. Writes go to the
//! store first and synchronize the cache only on success: create writes
//! through, update patches an existing entry (never populates), delete
//! invalidates.

use std::sync::Arc;

use serde_json::{json, Value};
use tokio::sync::RwLock;
use tracing::debug;

use crate::api::auth::Role;
use crate::cache::BannerCache;
use crate::error::{BannerError, Result};
use crate::models::{Banner, BannerUpdate, CreateBannerRequest};
use crate::repo::{BannerFilter, BannerRepo};

// == Banner Service ==
/// Orchestrates banner reads and writes across the store and the cache.
pub struct BannerService {
    repo: Arc<dyn BannerRepo>,
    cache: Arc<RwLock<BannerCache>>,
}

impl BannerService {
    pub fn new(repo: Arc<dyn BannerRepo>, cache: Arc<RwLock<BannerCache>>) -> Self {
        Self { repo, cache }
    }

    // == User-Facing Read ==
    /// Resolves the banner content for a (tag, feature) probe.
    ///
    /// Returns `Ok(None)` when nothing matches in cache or store. When a
    /// banner is found but inactive, an admin still receives its content
    /// (preview/debugging) while a user receives an explicit empty object.
    ///
    /// `force_fresh` bypasses the cache for the answer but still refreshes
    /// it with whatever the store returned.
    pub async fn get_user_banner(
        &self,
        tag_id: i16,
        feature_id: i16,
        force_fresh: bool,
        role: Role,
    ) -> Result<Option<Value>> {
        let banner = if force_fresh {
            self.read_through(tag_id, feature_id).await?
        } else {
            let cached = self.cache.write().await.touch_and_get(tag_id, feature_id);
            match cached {
                Some(banner) => {
                    debug!(tag_id, feature_id, banner_id = banner.id, "cache hit");
                    Some(banner)
                }
                None => {
                    debug!(tag_id, feature_id, "cache miss, reading store");
                    self.read_through(tag_id, feature_id).await?
                }
            }
        };

        let Some(banner) = banner else {
            return Ok(None);
        };

        if banner.is_active {
            return Ok(Some(banner.content));
        }
        match role {
            Role::Admin => Ok(Some(banner.content)),
            Role::User => Ok(Some(json!({}))),
        }
    }

    /// Store read that repopulates the cache on success.
    ///
    /// A store miss leaves the cache untouched; so does a store failure.
    async fn read_through(&self, tag_id: i16, feature_id: i16) -> Result<Option<Banner>> {
        match self.repo.find_by_tag_feature(tag_id, feature_id).await? {
            Some(banner) => {
                self.cache.write().await.upsert(banner.clone());
                Ok(Some(banner))
            }
            None => Ok(None),
        }
    }

    // == Admin Operations ==
    /// Lists banners straight from the store; the cache is not involved.
    pub async fn list_banners(&self, filter: &BannerFilter) -> Result<Vec<Banner>> {
        self.repo.list(filter).await
    }

    /// Validates and creates a banner, then writes it through to the cache
    /// under its store-assigned identity.
    pub async fn create_banner(&self, draft: CreateBannerRequest) -> Result<Banner> {
        if let Some(message) = draft.validate() {
            return Err(BannerError::Validation(message));
        }

        let banner = self.repo.create(&draft).await?;
        self.cache.write().await.upsert(banner.clone());
        Ok(banner)
    }

    /// Applies a partial update in the store, then patches the cache entry.
    ///
    /// The cache patch is a no-op when the banner is not cached; an update
    /// never populates the cache.
    pub async fn update_banner(&self, id: i64, update: BannerUpdate) -> Result<()> {
        if update.is_empty() {
            return Err(BannerError::Validation(
                "no fields to update".to_string(),
            ));
        }

        self.repo.update(id, &update).await?;
        self.cache.write().await.patch(id, &update);
        Ok(())
    }

    /// Deletes from the store and invalidates the cache entry, so the
    /// banner cannot be served until its TTL would have lapsed.
    pub async fn delete_banner(&self, id: i64) -> Result<bool> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            self.cache.write().await.remove(id);
        }
        Ok(deleted)
    }
}
