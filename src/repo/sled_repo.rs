//! Sled-backed banner store
//!
//! Embedded persistence: one record per banner, JSON-encoded, keyed by the
//! big-endian id so iteration walks banners in creation order. Ids come
//! from sled's monotonic id generator. Writes flush before returning so a
//! create/update acknowledged to the caller survives a crash.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;

use crate::error::{BannerError, Result};
use crate::models::{Banner, BannerUpdate, CreateBannerRequest};
use crate::repo::{BannerFilter, BannerRepo};

/// Sled-based persistent banner store.
pub struct SledBannerRepo {
    db: sled::Db,
}

impl SledBannerRepo {
    /// Opens (or creates) the store at the given path.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| BannerError::Store(format!("failed to create directory: {e}")))?;
        }

        let db = sled::open(path)?;
        Ok(Self { db })
    }

    fn key(id: i64) -> [u8; 8] {
        id.to_be_bytes()
    }

    fn decode(bytes: &[u8]) -> Result<Banner> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn put(&self, banner: &Banner) -> Result<()> {
        let value = serde_json::to_vec(banner)?;
        self.db.insert(Self::key(banner.id), value)?;
        self.db.flush()?;
        Ok(())
    }

    /// Walks every record, decoding as it goes.
    fn scan(&self) -> impl Iterator<Item = Result<Banner>> + '_ {
        self.db.iter().map(|item| {
            let (_, value) = item?;
            Self::decode(&value)
        })
    }
}

#[async_trait]
impl BannerRepo for SledBannerRepo {
    async fn find_by_tag_feature(
        &self,
        tag_id: i16,
        feature_id: i16,
    ) -> Result<Option<Banner>> {
        let mut best: Option<Banner> = None;
        for banner in self.scan() {
            let banner = banner?;
            if !banner.matches(tag_id, feature_id) {
                continue;
            }
            let better = match &best {
                Some(current) => {
                    (banner.updated_at, banner.id) > (current.updated_at, current.id)
                }
                None => true,
            };
            if better {
                best = Some(banner);
            }
        }
        Ok(best)
    }

    async fn list(&self, filter: &BannerFilter) -> Result<Vec<Banner>> {
        let mut banners = Vec::new();
        for banner in self.scan() {
            let banner = banner?;
            if let Some(tag_id) = filter.tag_id {
                if !banner.tag_ids.contains(&tag_id) {
                    continue;
                }
            }
            if let Some(feature_id) = filter.feature_id {
                if banner.feature_id != feature_id {
                    continue;
                }
            }
            banners.push(banner);
        }

        let offset = filter.offset.unwrap_or(0);
        let limit = filter.limit.unwrap_or(usize::MAX);
        Ok(banners.into_iter().skip(offset).take(limit).collect())
    }

    async fn create(&self, draft: &CreateBannerRequest) -> Result<Banner> {
        // generate_id is monotonic, so ids are unique across restarts
        let id = self.db.generate_id()? as i64;
        let now = Utc::now();
        let banner = Banner {
            id,
            tag_ids: draft.tag_ids.clone(),
            feature_id: draft.feature_id,
            content: draft.content.clone(),
            is_active: draft.is_active,
            created_at: now,
            updated_at: now,
        };

        self.put(&banner)?;
        Ok(banner)
    }

    async fn update(&self, id: i64, update: &BannerUpdate) -> Result<()> {
        let existing = self
            .db
            .get(Self::key(id))?
            .ok_or(BannerError::NotFound)?;

        let mut banner = Self::decode(&existing)?;
        update.apply(&mut banner);
        banner.updated_at = Utc::now();

        self.put(&banner)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let removed = self.db.remove(Self::key(id))?.is_some();
        self.db.flush()?;
        Ok(removed)
    }
}
