//! Response DTOs for the banner API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for POST /banner (201 Created).
#[derive(Debug, Clone, Serialize)]
pub struct CreateBannerResponse {
    /// Store-assigned identity of the new banner
    pub banner_id: i64,
}

impl CreateBannerResponse {
    pub fn new(banner_id: i64) -> Self {
        Self { banner_id }
    }
}

/// Response body for the stats endpoint (GET /stats).
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache scan hits
    pub hits: u64,
    /// Number of cache scan misses
    pub misses: u64,
    /// Total entries removed by the background sweep
    pub swept: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics.
    pub fn new(hits: u64, misses: u64, swept: u64, total_entries: usize) -> Self {
        let total_requests = hits + misses;
        let hit_rate = if total_requests > 0 {
            hits as f64 / total_requests as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            swept,
            total_entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health).
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
