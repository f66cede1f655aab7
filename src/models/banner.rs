//! Banner Domain Model
//!
//! The stored/cached entity plus the write-side input types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// == Banner ==
/// A banner as assigned by the persistent store.
///
/// Identity is store-assigned and immutable once created. The `content`
/// payload is an opaque JSON document returned verbatim to authorized
/// callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    /// Store-assigned identity
    #[serde(rename = "banner_id")]
    pub id: i64,
    /// Audience segments this banner is visible to
    pub tag_ids: Vec<i16>,
    /// Product feature this banner belongs to (exact match on reads)
    pub feature_id: i16,
    /// Opaque JSON payload
    pub content: Value,
    /// Visibility flag, independent of cache freshness
    pub is_active: bool,
    /// Store-assigned creation timestamp
    pub created_at: DateTime<Utc>,
    /// Store-maintained last-update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Banner {
    /// Whether this banner serves a (tag, feature) probe.
    pub fn matches(&self, tag_id: i16, feature_id: i16) -> bool {
        self.feature_id == feature_id && self.tag_ids.contains(&tag_id)
    }
}

// == Create Request ==
/// Request body for POST /banner.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBannerRequest {
    pub tag_ids: Vec<i16>,
    pub feature_id: i16,
    pub content: Value,
    pub is_active: bool,
}

impl CreateBannerRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.tag_ids.is_empty() {
            return Some("tag_ids cannot be empty".to_string());
        }
        if self.tag_ids.iter().any(|t| *t <= 0) {
            return Some("tag_ids must be positive".to_string());
        }
        if self.feature_id <= 0 {
            return Some("feature_id must be positive".to_string());
        }
        if self.content.is_null() {
            return Some("content cannot be empty".to_string());
        }
        None
    }
}

// == Banner Update ==
/// Partial update for PATCH /banner/:id.
///
/// Every field is optional; absent fields are left untouched. The same
/// structure drives both the store update and the cache patch, so the
/// patch contract is statically checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BannerUpdate {
    #[serde(default)]
    pub tag_ids: Option<Vec<i16>>,
    #[serde(default)]
    pub feature_id: Option<i16>,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl BannerUpdate {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.tag_ids.is_none()
            && self.feature_id.is_none()
            && self.content.is_none()
            && self.is_active.is_none()
    }

    /// Applies the set fields to a banner, leaving the rest as-is.
    pub fn apply(&self, banner: &mut Banner) {
        if let Some(tag_ids) = &self.tag_ids {
            banner.tag_ids = tag_ids.clone();
        }
        if let Some(feature_id) = self.feature_id {
            banner.feature_id = feature_id;
        }
        if let Some(content) = &self.content {
            banner.content = content.clone();
        }
        if let Some(is_active) = self.is_active {
            banner.is_active = is_active;
        }
    }
}
