//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycles over the router, including the token
//! middleware and the cache-aside read path.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use banner_api::api::auth::{ADMIN_TOKEN, USER_TOKEN};
use banner_api::api::{create_router, AppState};
use banner_api::cache::BannerCache;
use banner_api::repo::SledBannerRepo;
use banner_api::BannerService;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> (tempfile::TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let repo = Arc::new(SledBannerRepo::open(dir.path().join("banners.sled")).unwrap());
    let cache = Arc::new(RwLock::new(BannerCache::new(Duration::from_secs(300))));
    let service = Arc::new(BannerService::new(repo, cache.clone()));
    (dir, create_router(AppState::new(service, cache)))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

fn with_json_body(method: &str, uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Creates a banner via the admin API and returns its id.
async fn create_banner(app: &Router, body: Value) -> i64 {
    let response = app
        .clone()
        .oneshot(with_json_body("POST", "/banner", ADMIN_TOKEN, body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_to_json(response.into_body()).await["banner_id"]
        .as_i64()
        .unwrap()
}

// == Auth Tests ==

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let (_dir, app) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/user_banner?tag_id=7&feature_id=3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_token_is_unauthorized() {
    let (_dir, app) = create_test_app();

    let response = app
        .oneshot(get("/user_banner?tag_id=7&feature_id=3", "wrong_token"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_token_cannot_create_banners() {
    let (_dir, app) = create_test_app();

    let response = app
        .oneshot(with_json_body(
            "POST",
            "/banner",
            USER_TOKEN,
            json!({"tag_ids": [7], "feature_id": 3, "content": {"x": 1}, "is_active": true}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// == User Banner Read Tests ==

#[tokio::test]
async fn test_create_then_read_active_banner() {
    let (_dir, app) = create_test_app();
    create_banner(
        &app,
        json!({"tag_ids": [7], "feature_id": 3, "content": {"x": 1}, "is_active": true}),
    )
    .await;

    let response = app
        .oneshot(get("/user_banner?tag_id=7&feature_id=3", USER_TOKEN))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_json(response.into_body()).await, json!({"x": 1}));
}

#[tokio::test]
async fn test_read_unknown_pair_is_not_found() {
    let (_dir, app) = create_test_app();

    let response = app
        .oneshot(get("/user_banner?tag_id=9&feature_id=9", USER_TOKEN))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_read_rejects_non_positive_ids() {
    let (_dir, app) = create_test_app();

    let response = app
        .oneshot(get("/user_banner?tag_id=0&feature_id=3", USER_TOKEN))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_forced_fresh_read() {
    let (_dir, app) = create_test_app();
    create_banner(
        &app,
        json!({"tag_ids": [7], "feature_id": 3, "content": {"x": 1}, "is_active": true}),
    )
    .await;

    let response = app
        .oneshot(get(
            "/user_banner?tag_id=7&feature_id=3&use_last_revision=true",
            USER_TOKEN,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_json(response.into_body()).await, json!({"x": 1}));
}

// Scenario: patch a banner inactive, then read it as both roles
#[tokio::test]
async fn test_inactive_banner_visibility_by_role() {
    let (_dir, app) = create_test_app();
    let id = create_banner(
        &app,
        json!({"tag_ids": [7], "feature_id": 3, "content": {"x": 1}, "is_active": true}),
    )
    .await;

    let response = app
        .clone()
        .oneshot(with_json_body(
            "PATCH",
            &format!("/banner/{id}"),
            ADMIN_TOKEN,
            json!({"is_active": false}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // A user gets an explicit empty object, not an error
    let response = app
        .clone()
        .oneshot(get("/user_banner?tag_id=7&feature_id=3", USER_TOKEN))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_json(response.into_body()).await, json!({}));

    // An admin still gets the content
    let response = app
        .oneshot(get("/user_banner?tag_id=7&feature_id=3", ADMIN_TOKEN))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_json(response.into_body()).await, json!({"x": 1}));
}

// == Admin CRUD Tests ==

#[tokio::test]
async fn test_create_rejects_empty_tag_ids() {
    let (_dir, app) = create_test_app();

    let response = app
        .oneshot(with_json_body(
            "POST",
            "/banner",
            ADMIN_TOKEN,
            json!({"tag_ids": [], "feature_id": 3, "content": {"x": 1}, "is_active": true}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_list_banners_with_filters() {
    let (_dir, app) = create_test_app();
    create_banner(
        &app,
        json!({"tag_ids": [1], "feature_id": 1, "content": {"a": 1}, "is_active": true}),
    )
    .await;
    create_banner(
        &app,
        json!({"tag_ids": [1, 2], "feature_id": 2, "content": {"b": 2}, "is_active": true}),
    )
    .await;

    let response = app
        .clone()
        .oneshot(get("/banner?feature_id=2", ADMIN_TOKEN))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let banners = body_to_json(response.into_body()).await;
    assert_eq!(banners.as_array().unwrap().len(), 1);

    let response = app
        .oneshot(get("/banner?tag_id=1", ADMIN_TOKEN))
        .await
        .unwrap();
    let banners = body_to_json(response.into_body()).await;
    assert_eq!(banners.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_unknown_banner_is_not_found() {
    let (_dir, app) = create_test_app();

    let response = app
        .oneshot(with_json_body(
            "PATCH",
            "/banner/12345",
            ADMIN_TOKEN,
            json!({"is_active": false}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_banner_lifecycle() {
    let (_dir, app) = create_test_app();
    let id = create_banner(
        &app,
        json!({"tag_ids": [7], "feature_id": 3, "content": {"x": 1}, "is_active": true}),
    )
    .await;

    // Warm the cache via a user read
    let response = app
        .clone()
        .oneshot(get("/user_banner?tag_id=7&feature_id=3", USER_TOKEN))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Delete, then verify the banner is gone from cache and store alike
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/banner/{id}"))
                .header("Authorization", format!("Bearer {ADMIN_TOKEN}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(get("/user_banner?tag_id=7&feature_id=3", USER_TOKEN))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // A second delete reports nothing removed
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/banner/{id}"))
                .header("Authorization", format!("Bearer {ADMIN_TOKEN}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// == Stats Tests ==

#[tokio::test]
async fn test_stats_reflect_cache_traffic() {
    let (_dir, app) = create_test_app();
    create_banner(
        &app,
        json!({"tag_ids": [7], "feature_id": 3, "content": {"x": 1}, "is_active": true}),
    )
    .await;

    // Hit (write-through entry), then miss
    let _ = app
        .clone()
        .oneshot(get("/user_banner?tag_id=7&feature_id=3", USER_TOKEN))
        .await
        .unwrap();
    let _ = app
        .clone()
        .oneshot(get("/user_banner?tag_id=9&feature_id=9", USER_TOKEN))
        .await
        .unwrap();

    let response = app
        .oneshot(get("/stats", ADMIN_TOKEN))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let stats = body_to_json(response.into_body()).await;

    assert_eq!(stats["hits"].as_u64().unwrap(), 1);
    assert_eq!(stats["misses"].as_u64().unwrap(), 1);
    assert_eq!(stats["total_entries"].as_u64().unwrap(), 1);
    assert!(stats.get("hit_rate").is_some());
}
