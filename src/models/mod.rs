// Model exports
pub mod domain;
pub mod input;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, ContractType, CriterionDetail, Currency, Explanation, ExplanationKind,
    GeoPoint, JobProfile, LocationDetail, MatchDetails, MatchResult, MatchWeights, RankedOffer,
    RemotePreference, SalaryDetail, SalaryPeriod, SalaryRange, Skill, SkillLevel, SkillsDetail,
};
pub use input::{CandidateRecord, JobOfferRecord};
pub use requests::{ScoreMatchRequest, TopMatchesRequest};
pub use responses::{ErrorResponse, HealthResponse, TopMatchesResponse};
