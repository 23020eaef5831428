//! Nexten Match - candidate/job matching engine for the Nexten recruiting
//! platform.
//!
//! This library scores a candidate profile against a job offer across six
//! weighted criteria (skills, experience, location, remote preference,
//! contract type, salary) and ranks offer batches for a candidate. Scoring
//! is pure and side-effect free; raw collaborator records are normalized
//! once by the adapter in `models::input` before the core ever sees them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{haversine_distance, EngineError, MatchConfig, MatchingEngine};
pub use crate::models::{
    CandidateProfile, CandidateRecord, JobOfferRecord, JobProfile, MatchResult, MatchWeights,
    RankedOffer,
};
