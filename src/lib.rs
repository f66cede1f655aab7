//! Banner API - banner delivery with an in-process TTL cache
//!
//! Serves feature-flag-like banners keyed by (tag, feature), with an
//! admin CRUD surface over an embedded persistent store and a sliding-TTL
//! cache on the hot read path.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repo;
pub mod service;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use service::BannerService;
pub use tasks::spawn_sweep_task;
