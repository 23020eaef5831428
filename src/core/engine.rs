use thiserror::Error;

use crate::core::{contract, experience, explain, location, remote, salary, skills};
use crate::models::{
    CandidateProfile, CandidateRecord, CriterionDetail, JobOfferRecord, JobProfile,
    LocationDetail, MatchDetails, MatchResult, MatchWeights, RankedOffer, SalaryDetail,
    SkillsDetail,
};

/// Default number of offers returned by top-matches ranking.
pub const DEFAULT_TOP_MATCHES_LIMIT: usize = 10;

/// Errors raised when building an engine from an invalid configuration.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("criterion weights must sum to 1.0, got {0}")]
    InvalidWeights(f64),

    #[error("relevance threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),
}

/// Immutable scoring configuration, injected at construction time so tests
/// and deployments can vary weightings deterministically.
#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub weights: MatchWeights,
    pub relevance_threshold: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
            relevance_threshold: 0.60,
        }
    }
}

/// Multi-criteria matching engine comparing candidate profiles against job
/// offers.
///
/// # Scoring
/// Six sub-scores, each normalized to [0, 1], combine into a weighted sum:
/// skills 0.35, experience 0.20, location 0.15, remote preference 0.10,
/// contract type 0.10, salary 0.10 by default. The composite is reported on
/// a 0-100 scale; a match is relevant when the unrounded weighted sum
/// reaches the relevance threshold (0.60 by default).
///
/// Scoring is pure: inputs are never mutated, no state is shared across
/// calls, and missing or malformed data degrades to documented neutral
/// scores instead of failing.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    config: MatchConfig,
}

impl MatchingEngine {
    /// Build an engine, validating the configuration.
    pub fn new(config: MatchConfig) -> Result<Self, EngineError> {
        let sum = config.weights.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(EngineError::InvalidWeights(sum));
        }
        if !(0.0..=1.0).contains(&config.relevance_threshold) {
            return Err(EngineError::InvalidThreshold(config.relevance_threshold));
        }
        Ok(Self { config })
    }

    /// Engine with the default weights and relevance threshold.
    pub fn with_defaults() -> Self {
        Self {
            config: MatchConfig::default(),
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Score a raw (candidate, offer) pair.
    ///
    /// Either record absent yields the zero, non-relevant result rather than
    /// an error: one incomplete record must never abort a batch.
    pub fn score(
        &self,
        candidate: Option<&CandidateRecord>,
        offer: Option<&JobOfferRecord>,
    ) -> MatchResult {
        match (candidate, offer) {
            (Some(candidate), Some(offer)) => {
                self.score_profiles(&candidate.normalize(), &offer.normalize())
            }
            _ => {
                tracing::warn!("candidate or offer record missing, returning zero match");
                MatchResult::no_match()
            }
        }
    }

    /// Score a pair of canonical profiles.
    pub fn score_profiles(&self, candidate: &CandidateProfile, offer: &JobProfile) -> MatchResult {
        let weights = &self.config.weights;

        let skills_score = skills::score_skills(&candidate.skills, &offer.required_skills);
        let experience_score = experience::score_experience(
            candidate.experience_years,
            offer.required_experience_years,
        );
        let (location_score, distance_km) = location::score_location(
            candidate.location,
            candidate.willing_to_relocate,
            offer.location,
            offer.fully_remote,
        );
        let remote_score = remote::score_remote(candidate.remote_preference, offer.remote_policy);
        let contract_score = contract::score_contract(candidate.contract_type, offer.contract_type);
        let salary_score = salary::score_salary(candidate.salary.as_ref(), offer.salary.as_ref());

        let weighted_sum = weights.skills * skills_score
            + weights.experience * experience_score
            + weights.location * location_score
            + weights.remote_preference * remote_score
            + weights.contract_type * contract_score
            + weights.salary * salary_score;

        let details = MatchDetails {
            skills: SkillsDetail {
                score: as_percent(skills_score),
                weight: weights.skills * 100.0,
                contribution: contribution(weights.skills, skills_score),
                matched_skills: skills::matched_skills(&candidate.skills, &offer.required_skills),
                missing_skills: skills::missing_skills(&candidate.skills, &offer.required_skills),
            },
            experience: CriterionDetail {
                score: as_percent(experience_score),
                weight: weights.experience * 100.0,
                contribution: contribution(weights.experience, experience_score),
            },
            location: LocationDetail {
                score: as_percent(location_score),
                weight: weights.location * 100.0,
                contribution: contribution(weights.location, location_score),
                distance_km,
            },
            remote_preference: CriterionDetail {
                score: as_percent(remote_score),
                weight: weights.remote_preference * 100.0,
                contribution: contribution(weights.remote_preference, remote_score),
            },
            contract_type: CriterionDetail {
                score: as_percent(contract_score),
                weight: weights.contract_type * 100.0,
                contribution: contribution(weights.contract_type, contract_score),
            },
            salary: SalaryDetail {
                score: as_percent(salary_score),
                weight: weights.salary * 100.0,
                contribution: contribution(weights.salary, salary_score),
                candidate_salary: candidate.salary,
                offer_salary: offer.salary,
            },
        };

        let is_relevant = weighted_sum >= self.config.relevance_threshold;
        let explanations = explain::generate_explanations(&details, is_relevant);

        MatchResult {
            total_score: as_percent(weighted_sum),
            details: Some(details),
            is_relevant,
            explanations,
        }
    }

    /// Score every offer for one candidate, keep the relevant ones, and
    /// return the best `limit` sorted by descending score.
    ///
    /// The sort is stable: offers with equal scores keep their input order.
    pub fn filter_top_matches(
        &self,
        candidate: Option<&CandidateRecord>,
        offers: &[JobOfferRecord],
        limit: usize,
    ) -> Vec<RankedOffer> {
        let candidate = match candidate {
            Some(candidate) => candidate.normalize(),
            None => {
                tracing::warn!("candidate record missing, returning no matches");
                return Vec::new();
            }
        };

        let score_floor = self.config.relevance_threshold * 100.0;

        let mut ranked: Vec<RankedOffer> = offers
            .iter()
            .map(|offer| RankedOffer {
                result: self.score_profiles(&candidate, &offer.normalize()),
                offer: offer.clone(),
            })
            .filter(|ranked| {
                ranked.result.is_relevant || f64::from(ranked.result.total_score) >= score_floor
            })
            .collect();

        ranked.sort_by(|a, b| b.result.total_score.cmp(&a.result.total_score));
        ranked.truncate(limit);
        ranked
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[inline]
fn as_percent(score: f64) -> u8 {
    (score * 100.0).round() as u8
}

#[inline]
fn contribution(weight: f64, score: f64) -> u8 {
    (weight * score * 100.0).round() as u8
}
