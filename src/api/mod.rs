//! API Module
//!
//! HTTP handlers, routing, and the token middleware for the banner REST API.
//!
//! # Endpoints
//! - `GET /user_banner` - banner content for a (tag, feature) pair
//! - `GET /banner`, `POST /banner`, `PATCH /banner/:id`, `DELETE /banner/:id`
//!   - admin CRUD surface
//! - `GET /stats` - cache statistics (admin)
//! - `GET /health` - health check

pub mod auth;
pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
