use serde::{Deserialize, Serialize};

use crate::models::domain::RankedOffer;

/// Response for the top-matches endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopMatchesResponse {
    pub matches: Vec<RankedOffer>,
    pub total_offers: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
