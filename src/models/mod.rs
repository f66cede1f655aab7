//! Domain model and request/response DTOs for the banner API
//!
//! `banner` holds the stored entity and the write-side input types;
//! `requests` and `responses` hold the HTTP-facing DTOs.

pub mod banner;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use banner::{Banner, BannerUpdate, CreateBannerRequest};
pub use requests::{ListBannersQuery, UserBannerQuery};
pub use responses::{CreateBannerResponse, ErrorResponse, HealthResponse, StatsResponse};
