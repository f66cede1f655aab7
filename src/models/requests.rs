//! Query DTOs for the banner API
//!
//! Deserialized from URL query strings by axum's `Query` extractor.

use serde::Deserialize;

/// Query parameters for GET /user_banner.
#[derive(Debug, Clone, Deserialize)]
pub struct UserBannerQuery {
    pub tag_id: i16,
    pub feature_id: i16,
    /// When true, bypass the cache and read the store directly
    #[serde(default)]
    pub use_last_revision: bool,
}

impl UserBannerQuery {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.tag_id <= 0 {
            return Some("tag_id must be positive".to_string());
        }
        if self.feature_id <= 0 {
            return Some("feature_id must be positive".to_string());
        }
        None
    }
}

/// Query parameters for GET /banner (admin listing).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListBannersQuery {
    #[serde(default)]
    pub tag_id: Option<i16>,
    #[serde(default)]
    pub feature_id: Option<i16>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: Option<usize>,
}
