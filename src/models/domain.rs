use serde::{Deserialize, Serialize};

use crate::models::input::JobOfferRecord;

/// Proficiency level attached to a skill, ordered from beginner to expert.
///
/// Free-text labels (French or English) are mapped onto the four ordinals;
/// anything unrecognized counts as intermediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Numeric rank 1-4 used for level-gap penalties.
    pub fn ordinal(self) -> u8 {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
            SkillLevel::Expert => 4,
        }
    }

    /// Parse a proficiency label. Unknown labels default to intermediate.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "débutant" | "junior" | "notions" | "basique" | "beginner" => SkillLevel::Beginner,
            "intermédiaire" | "moyen" | "intermediate" => SkillLevel::Intermediate,
            "confirmé" | "avancé" | "senior" | "advanced" => SkillLevel::Advanced,
            "expert" | "maître" | "master" => SkillLevel::Expert,
            _ => SkillLevel::Intermediate,
        }
    }
}

impl Default for SkillLevel {
    fn default() -> Self {
        SkillLevel::Intermediate
    }
}

/// A named skill with its proficiency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: SkillLevel) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

/// Geographic coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Salary currency. Conversion rates to EUR are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Usd,
    Gbp,
}

impl Currency {
    pub fn eur_rate(self) -> f64 {
        match self {
            Currency::Eur => 1.0,
            Currency::Usd => 0.85,
            Currency::Gbp => 1.15,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Eur
    }
}

/// Period a salary figure refers to. Annualization factors are fixed:
/// monthly x12, daily x220 worked days, hourly x1820 (35h x 52 weeks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryPeriod {
    Yearly,
    Monthly,
    Daily,
    Hourly,
}

impl SalaryPeriod {
    pub fn annual_factor(self) -> f64 {
        match self {
            SalaryPeriod::Yearly => 1.0,
            SalaryPeriod::Monthly => 12.0,
            SalaryPeriod::Daily => 220.0,
            SalaryPeriod::Hourly => 35.0 * 52.0,
        }
    }
}

impl Default for SalaryPeriod {
    fn default() -> Self {
        SalaryPeriod::Yearly
    }
}

/// A salary band as parsed from structured data or free text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub period: SalaryPeriod,
}

/// Remote-work preference (candidate side) or policy (offer side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemotePreference {
    FullRemote = 0,
    Hybrid = 1,
    OnSite = 2,
    NoPreference = 3,
}

/// Employment contract type, French market vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContractType {
    /// CDI
    Permanent = 0,
    /// CDD
    FixedTerm = 1,
    Freelance = 2,
    /// Stage
    Internship = 3,
    /// Alternance
    Apprenticeship = 4,
    /// Intérim
    Temporary = 5,
}

/// Flat candidate profile consumed by the scorers.
///
/// Produced once per record by the adapter in `models::input`; the scoring
/// core never probes nested record shapes.
#[derive(Debug, Clone, Default)]
pub struct CandidateProfile {
    pub skills: Vec<Skill>,
    pub experience_years: Option<f64>,
    pub location: Option<GeoPoint>,
    pub willing_to_relocate: bool,
    pub remote_preference: Option<RemotePreference>,
    pub contract_type: Option<ContractType>,
    pub salary: Option<SalaryRange>,
}

/// Flat job-offer profile consumed by the scorers.
#[derive(Debug, Clone, Default)]
pub struct JobProfile {
    pub required_skills: Vec<Skill>,
    pub required_experience_years: Option<f64>,
    pub location: Option<GeoPoint>,
    pub fully_remote: bool,
    pub remote_policy: Option<RemotePreference>,
    pub contract_type: Option<ContractType>,
    pub salary: Option<SalaryRange>,
}

/// Per-criterion weights of the composite score. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub remote_preference: f64,
    pub contract_type: f64,
    pub salary: f64,
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skills
            + self.experience
            + self.location
            + self.remote_preference
            + self.contract_type
            + self.salary
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.35,
            experience: 0.20,
            location: 0.15,
            remote_preference: 0.10,
            contract_type: 0.10,
            salary: 0.10,
        }
    }
}

/// Score, weight and weighted contribution of one criterion, all expressed
/// on a 0-100 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionDetail {
    pub score: u8,
    pub weight: f64,
    pub contribution: u8,
}

/// Skills criterion detail with the matched/missing breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsDetail {
    pub score: u8,
    pub weight: f64,
    pub contribution: u8,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
}

/// Location criterion detail with the resolved commute distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDetail {
    pub score: u8,
    pub weight: f64,
    pub contribution: u8,
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
}

/// Salary criterion detail echoing both parsed salary bands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryDetail {
    pub score: u8,
    pub weight: f64,
    pub contribution: u8,
    #[serde(rename = "candidateSalary")]
    pub candidate_salary: Option<SalaryRange>,
    #[serde(rename = "offerSalary")]
    pub offer_salary: Option<SalaryRange>,
}

/// Per-criterion breakdown of a match score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDetails {
    pub skills: SkillsDetail,
    pub experience: CriterionDetail,
    pub location: LocationDetail,
    #[serde(rename = "remotePreference")]
    pub remote_preference: CriterionDetail,
    #[serde(rename = "contractType")]
    pub contract_type: CriterionDetail,
    pub salary: SalaryDetail,
}

/// Criterion an explanation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationKind {
    Global,
    Skills,
    Experience,
    Location,
    Salary,
}

/// Human-readable summary of one aspect of the match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    #[serde(rename = "type")]
    pub kind: ExplanationKind,
    pub text: String,
    #[serde(rename = "matchedSkills", default, skip_serializing_if = "Vec::is_empty")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "missingSkills", default, skip_serializing_if = "Vec::is_empty")]
    pub missing_skills: Vec<String>,
}

impl Explanation {
    pub fn new(kind: ExplanationKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            matched_skills: Vec::new(),
            missing_skills: Vec::new(),
        }
    }
}

/// Result of scoring one (candidate, offer) pair.
///
/// Produced fresh per pair and never persisted. A missing candidate or offer
/// yields the zero, non-relevant result instead of an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "totalScore")]
    pub total_score: u8,
    pub details: Option<MatchDetails>,
    #[serde(rename = "isRelevant")]
    pub is_relevant: bool,
    #[serde(default)]
    pub explanations: Vec<Explanation>,
}

impl MatchResult {
    /// The zero result returned when either input record is absent.
    pub fn no_match() -> Self {
        Self {
            total_score: 0,
            details: None,
            is_relevant: false,
            explanations: Vec::new(),
        }
    }
}

/// A job offer echoed together with its match result, as returned by
/// top-matches ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedOffer {
    pub offer: JobOfferRecord,
    pub result: MatchResult,
}
