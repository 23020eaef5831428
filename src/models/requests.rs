use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::input::{CandidateRecord, JobOfferRecord};

/// Request to score a single (candidate, offer) pair.
///
/// Both records are optional on the wire; a missing one yields the zero,
/// non-relevant result rather than a validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreMatchRequest {
    #[serde(default)]
    pub candidate: Option<CandidateRecord>,
    #[serde(alias = "jobOffer", default)]
    pub offer: Option<JobOfferRecord>,
}

/// Request to rank a batch of offers for one candidate.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TopMatchesRequest {
    #[serde(default)]
    pub candidate: Option<CandidateRecord>,
    #[serde(default)]
    pub offers: Vec<JobOfferRecord>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    crate::core::DEFAULT_TOP_MATCHES_LIMIT as u16
}
