//! API Routes
//!
//! Configures the axum router with all banner endpoints.

use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::auth::{authenticate, require_admin};
use super::handlers::{
    create_banner, delete_banner, get_user_banner, health_handler, list_banners,
    stats_handler, update_banner, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /user_banner` - banner content for a (tag, feature) pair (any role)
/// - `GET /banner` - list banners (admin)
/// - `POST /banner` - create a banner (admin)
/// - `PATCH /banner/:id` - partially update a banner (admin)
/// - `DELETE /banner/:id` - delete a banner (admin)
/// - `GET /stats` - cache statistics (admin)
/// - `GET /health` - health check, no auth
///
/// # Middleware
/// - Bearer-token auth on every banner route; the admin sub-router adds a
///   role gate on top
/// - CORS: allows any origin (configurable for production)
/// - Tracing: logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let admin_routes = Router::new()
        .route("/banner", get(list_banners))
        .route("/banner", post(create_banner))
        .route("/banner/:id", patch(update_banner))
        .route("/banner/:id", delete(delete_banner))
        .route("/stats", get(stats_handler))
        .layer(middleware::from_fn(require_admin));

    let authed = Router::new()
        .route("/user_banner", get(get_user_banner))
        .merge(admin_routes)
        .layer(middleware::from_fn(authenticate));

    Router::new()
        .merge(authed)
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
