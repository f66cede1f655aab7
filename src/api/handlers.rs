//! API Handlers
//!
//! HTTP request handlers for each banner endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::api::auth::Role;
use crate::cache::BannerCache;
use crate::error::{BannerError, Result};
use crate::models::{
    Banner, BannerUpdate, CreateBannerRequest, CreateBannerResponse, HealthResponse,
    ListBannersQuery, StatsResponse, UserBannerQuery,
};
use crate::repo::BannerFilter;
use crate::service::BannerService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Orchestrator over the store and the cache
    pub service: Arc<BannerService>,
    /// Direct cache handle for the stats endpoint
    pub cache: Arc<RwLock<BannerCache>>,
}

impl AppState {
    pub fn new(service: Arc<BannerService>, cache: Arc<RwLock<BannerCache>>) -> Self {
        Self { service, cache }
    }
}

/// Handler for GET /user_banner
///
/// Serves the banner content for the caller's (tag, feature) pair. An
/// inactive banner yields `{}` for users and the real content for admins;
/// no match at all yields 404.
pub async fn get_user_banner(
    State(state): State<AppState>,
    Extension(role): Extension<Role>,
    Query(query): Query<UserBannerQuery>,
) -> Result<Json<Value>> {
    if let Some(message) = query.validate() {
        return Err(BannerError::Validation(message));
    }

    let content = state
        .service
        .get_user_banner(query.tag_id, query.feature_id, query.use_last_revision, role)
        .await?
        .ok_or(BannerError::NotFound)?;

    Ok(Json(content))
}

/// Handler for GET /banner (admin)
///
/// Lists banners from the store with optional filters and paging.
pub async fn list_banners(
    State(state): State<AppState>,
    Query(query): Query<ListBannersQuery>,
) -> Result<Json<Vec<Banner>>> {
    let filter = BannerFilter {
        tag_id: query.tag_id,
        feature_id: query.feature_id,
        limit: query.limit,
        offset: query.offset,
    };
    let banners = state.service.list_banners(&filter).await?;
    Ok(Json(banners))
}

/// Handler for POST /banner (admin)
pub async fn create_banner(
    State(state): State<AppState>,
    Json(draft): Json<CreateBannerRequest>,
) -> Result<(StatusCode, Json<CreateBannerResponse>)> {
    let banner = state.service.create_banner(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateBannerResponse::new(banner.id)),
    ))
}

/// Handler for PATCH /banner/:id (admin)
pub async fn update_banner(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(update): Json<BannerUpdate>,
) -> Result<StatusCode> {
    state.service.update_banner(id, update).await?;
    Ok(StatusCode::OK)
}

/// Handler for DELETE /banner/:id (admin)
pub async fn delete_banner(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    if state.service.delete_banner(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(BannerError::NotFound)
    }
}

/// Handler for GET /stats (admin)
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.read().await.stats();
    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.swept,
        stats.total_entries,
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
