//! Raw collaborator records and their one-shot normalization.
//!
//! The CV parser, questionnaire forms and job-posting store all describe the
//! same facts in different places: under `parsedData` (parser output), under
//! `questionnaire` (form answers) or as flat properties. The adapters here
//! resolve that precedence (parsed > questionnaire > flat > default) once
//! per record, producing the flat canonical profiles the scoring core works
//! on. Nothing downstream probes record shapes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{contract, experience, location, remote, salary};
use crate::models::{
    CandidateProfile, ContractType, GeoPoint, JobProfile, RemotePreference, SalaryRange, Skill,
    SkillLevel,
};

/// A skill as collaborators send it: either a bare name or a name with a
/// proficiency label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillEntry {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        level: Option<String>,
    },
}

impl SkillEntry {
    fn to_skill(&self) -> Skill {
        match self {
            SkillEntry::Name(name) => Skill::new(name.clone(), SkillLevel::Intermediate),
            SkillEntry::Detailed { name, level } => Skill::new(
                name.clone(),
                level.as_deref().map(SkillLevel::parse).unwrap_or_default(),
            ),
        }
    }
}

/// An experience field: a number of years, free text, or a `{years}` object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExperienceField {
    Years(f64),
    Text(String),
    Detailed {
        #[serde(default)]
        years: Option<YearsValue>,
    },
}

/// Years expressed as a number or as text ("3", "3 ans").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearsValue {
    Number(f64),
    Text(String),
}

impl YearsValue {
    fn as_years(&self) -> Option<f64> {
        match self {
            YearsValue::Number(years) => Some(*years),
            YearsValue::Text(text) => experience::parse_years(text),
        }
    }
}

impl ExperienceField {
    fn as_years(&self) -> Option<f64> {
        match self {
            ExperienceField::Years(years) => Some(*years),
            ExperienceField::Text(text) => Some(
                experience::parse_years(text).unwrap_or(experience::DEFAULT_EXPERIENCE_YEARS),
            ),
            ExperienceField::Detailed { years } => years
                .as_ref()
                .and_then(YearsValue::as_years)
                .or(Some(experience::DEFAULT_EXPERIENCE_YEARS)),
        }
    }
}

/// CV-parser output attached to a candidate record.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ParsedData {
    #[serde(default)]
    pub skills: Option<ParsedSkills>,
    #[serde(default)]
    pub experience: Option<ParsedExperience>,
    #[serde(default)]
    pub location: Option<ParsedLocation>,
    #[serde(default)]
    pub availability: Option<ParsedAvailability>,
    #[serde(rename = "jobPreferences", default)]
    pub job_preferences: Option<ParsedJobPreferences>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ParsedSkills {
    #[serde(default)]
    pub normalized: Option<NormalizedSkills>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NormalizedSkills {
    #[serde(rename = "technicalSkills", default)]
    pub technical_skills: Vec<String>,
    #[serde(rename = "technicalSkillLevels", default)]
    pub technical_skill_levels: HashMap<String, LevelEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LevelEntry {
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ParsedExperience {
    #[serde(default)]
    pub years: Option<YearsValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ParsedLocation {
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ParsedAvailability {
    #[serde(default)]
    pub normalized: Option<NormalizedAvailability>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NormalizedAvailability {
    #[serde(rename = "relocateWilling", default)]
    pub relocate_willing: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ParsedJobPreferences {
    #[serde(default)]
    pub normalized: Option<NormalizedJobPreferences>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NormalizedJobPreferences {
    #[serde(rename = "remotePreference", default)]
    pub remote_preference: Option<String>,
    #[serde(rename = "contractType", default)]
    pub contract_type: Option<String>,
    #[serde(rename = "salaryExpectation", default)]
    pub salary_expectation: Option<SalaryRange>,
}

/// Questionnaire answers attached to a candidate record.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Questionnaire {
    #[serde(default)]
    pub skills: Option<QuestionnaireSkills>,
    #[serde(default)]
    pub experience: Option<QuestionnaireExperience>,
    #[serde(default)]
    pub availability: Option<QuestionnaireAvailability>,
    #[serde(rename = "jobPreferences", default)]
    pub job_preferences: Option<QuestionnaireJobPreferences>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuestionnaireSkills {
    #[serde(rename = "technicalSkills", default)]
    pub technical_skills: Vec<String>,
    #[serde(rename = "technicalSkillLevels", default)]
    pub technical_skill_levels: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuestionnaireExperience {
    #[serde(default)]
    pub years: Option<YearsValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuestionnaireAvailability {
    #[serde(rename = "relocateWilling", default)]
    pub relocate_willing: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuestionnaireJobPreferences {
    #[serde(rename = "locationCoordinates", default)]
    pub location_coordinates: Option<GeoPoint>,
    #[serde(rename = "remotePreference", default)]
    pub remote_preference: Option<String>,
    #[serde(rename = "contractType", default)]
    pub contract_type: Option<String>,
    #[serde(rename = "salaryExpectation", default)]
    pub salary_expectation: Option<String>,
}

/// A candidate record as supplied by collaborators.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CandidateRecord {
    #[serde(rename = "parsedData", default)]
    pub parsed_data: Option<ParsedData>,
    #[serde(default)]
    pub questionnaire: Option<Questionnaire>,
    #[serde(default)]
    pub skills: Option<Vec<SkillEntry>>,
    #[serde(default)]
    pub experience: Option<ExperienceField>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "locationCoordinates", default)]
    pub location_coordinates: Option<GeoPoint>,
    #[serde(rename = "remotePreference", default)]
    pub remote_preference: Option<String>,
    #[serde(rename = "contractType", default)]
    pub contract_type: Option<String>,
    #[serde(rename = "salaryExpectation", default)]
    pub salary_expectation: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
}

impl CandidateRecord {
    /// Resolve the nested field precedence into a flat canonical profile.
    pub fn normalize(&self) -> CandidateProfile {
        CandidateProfile {
            skills: self.extract_skills(),
            experience_years: self.extract_experience(),
            location: self.extract_location(),
            willing_to_relocate: self.extract_relocation(),
            remote_preference: self.extract_remote_preference(),
            contract_type: self.extract_contract_type(),
            salary: self.extract_salary(),
        }
    }

    fn extract_skills(&self) -> Vec<Skill> {
        if let Some(normalized) = self
            .parsed_data
            .as_ref()
            .and_then(|p| p.skills.as_ref())
            .and_then(|s| s.normalized.as_ref())
        {
            if !normalized.technical_skills.is_empty() {
                return normalized
                    .technical_skills
                    .iter()
                    .map(|name| {
                        let level = normalized
                            .technical_skill_levels
                            .get(name)
                            .and_then(|entry| entry.level.as_deref())
                            .map(SkillLevel::parse)
                            .unwrap_or_default();
                        Skill::new(name.clone(), level)
                    })
                    .collect();
            }
        }

        if let Some(skills) = self.questionnaire.as_ref().and_then(|q| q.skills.as_ref()) {
            if !skills.technical_skills.is_empty() {
                return skills
                    .technical_skills
                    .iter()
                    .map(|name| {
                        let level = skills
                            .technical_skill_levels
                            .get(name)
                            .map(|label| SkillLevel::parse(label))
                            .unwrap_or_default();
                        Skill::new(name.clone(), level)
                    })
                    .collect();
            }
        }

        self.skills
            .as_ref()
            .map(|entries| entries.iter().map(SkillEntry::to_skill).collect())
            .unwrap_or_default()
    }

    fn extract_experience(&self) -> Option<f64> {
        if let Some(years) = self
            .parsed_data
            .as_ref()
            .and_then(|p| p.experience.as_ref())
            .and_then(|e| e.years.as_ref())
            .and_then(YearsValue::as_years)
        {
            return Some(years);
        }

        if let Some(years) = self
            .questionnaire
            .as_ref()
            .and_then(|q| q.experience.as_ref())
            .and_then(|e| e.years.as_ref())
            .and_then(YearsValue::as_years)
        {
            return Some(years);
        }

        self.experience.as_ref().and_then(ExperienceField::as_years)
    }

    fn extract_location(&self) -> Option<GeoPoint> {
        if let Some(coordinates) = self.location_coordinates {
            return Some(coordinates);
        }

        if let Some(coordinates) = self
            .parsed_data
            .as_ref()
            .and_then(|p| p.location.as_ref())
            .and_then(|l| l.coordinates)
        {
            return Some(coordinates);
        }

        if let Some(coordinates) = self
            .questionnaire
            .as_ref()
            .and_then(|q| q.job_preferences.as_ref())
            .and_then(|p| p.location_coordinates)
        {
            return Some(coordinates);
        }

        self.location.as_deref().map(location::resolve_city)
    }

    fn extract_relocation(&self) -> bool {
        if let Some(willing) = self
            .parsed_data
            .as_ref()
            .and_then(|p| p.availability.as_ref())
            .and_then(|a| a.normalized.as_ref())
            .and_then(|n| n.relocate_willing)
        {
            return willing;
        }

        self.questionnaire
            .as_ref()
            .and_then(|q| q.availability.as_ref())
            .and_then(|a| a.relocate_willing)
            .unwrap_or(false)
    }

    fn extract_remote_preference(&self) -> Option<RemotePreference> {
        self.parsed_data
            .as_ref()
            .and_then(|p| p.job_preferences.as_ref())
            .and_then(|p| p.normalized.as_ref())
            .and_then(|n| n.remote_preference.as_deref())
            .or_else(|| {
                self.questionnaire
                    .as_ref()
                    .and_then(|q| q.job_preferences.as_ref())
                    .and_then(|p| p.remote_preference.as_deref())
            })
            .or(self.remote_preference.as_deref())
            .map(remote::normalize_preference)
    }

    fn extract_contract_type(&self) -> Option<ContractType> {
        self.parsed_data
            .as_ref()
            .and_then(|p| p.job_preferences.as_ref())
            .and_then(|p| p.normalized.as_ref())
            .and_then(|n| n.contract_type.as_deref())
            .or_else(|| {
                self.questionnaire
                    .as_ref()
                    .and_then(|q| q.job_preferences.as_ref())
                    .and_then(|p| p.contract_type.as_deref())
            })
            .or(self.contract_type.as_deref())
            .map(contract::normalize_contract)
    }

    fn extract_salary(&self) -> Option<SalaryRange> {
        if let Some(range) = self
            .parsed_data
            .as_ref()
            .and_then(|p| p.job_preferences.as_ref())
            .and_then(|p| p.normalized.as_ref())
            .and_then(|n| n.salary_expectation)
        {
            return Some(range);
        }

        if let Some(text) = self
            .questionnaire
            .as_ref()
            .and_then(|q| q.job_preferences.as_ref())
            .and_then(|p| p.salary_expectation.as_deref())
        {
            return salary::parse_salary_text(text);
        }

        if let Some(text) = self.salary_expectation.as_deref() {
            return salary::parse_salary_text(text);
        }

        self.salary
            .as_deref()
            .and_then(salary::parse_salary_text)
    }
}

/// A job offer record as supplied by the posting store.
///
/// Unrecognized fields (identifiers, company names, tags) are carried through
/// untouched so ranked offers echo the full posting.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JobOfferRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Contract type, or "remote" for fully-remote postings.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub offer_type: Option<String>,
    #[serde(rename = "requiredSkills", default, skip_serializing_if = "Option::is_none")]
    pub required_skills: Option<Vec<SkillEntry>>,
    /// Free-text requirements, split on commas/semicolons when no structured
    /// skill list is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<ExperienceField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "locationCoordinates", default, skip_serializing_if = "Option::is_none")]
    pub location_coordinates: Option<GeoPoint>,
    #[serde(rename = "remotePolicy", default, skip_serializing_if = "Option::is_none")]
    pub remote_policy: Option<String>,
    #[serde(rename = "contractType", default, skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl JobOfferRecord {
    /// Resolve the record into a flat canonical profile.
    pub fn normalize(&self) -> JobProfile {
        JobProfile {
            required_skills: self.extract_required_skills(),
            required_experience_years: self.experience.as_ref().and_then(ExperienceField::as_years),
            location: self.extract_location(),
            fully_remote: remote::is_fully_remote(
                self.offer_type.as_deref(),
                self.title.as_deref(),
                self.description.as_deref(),
            ),
            remote_policy: self.extract_remote_policy(),
            contract_type: self.extract_contract_type(),
            salary: self.salary.as_deref().and_then(salary::parse_salary_text),
        }
    }

    fn extract_required_skills(&self) -> Vec<Skill> {
        if let Some(entries) = &self.required_skills {
            return entries.iter().map(SkillEntry::to_skill).collect();
        }

        if let Some(requirements) = &self.requirements {
            return requirements
                .split([',', ';'])
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(|token| Skill::new(token, SkillLevel::Intermediate))
                .collect();
        }

        Vec::new()
    }

    fn extract_location(&self) -> Option<GeoPoint> {
        if let Some(coordinates) = self.location_coordinates {
            return Some(coordinates);
        }
        self.location.as_deref().map(location::resolve_city)
    }

    fn extract_remote_policy(&self) -> Option<RemotePreference> {
        if let Some(offer_type) = self.offer_type.as_deref() {
            let offer_type = offer_type.trim().to_lowercase();
            if offer_type == "remote" || offer_type == "télétravail" {
                return Some(RemotePreference::FullRemote);
            }
        }

        if let Some(policy) = self.remote_policy.as_deref() {
            return Some(remote::normalize_preference(policy));
        }

        remote::infer_policy(self.title.as_deref(), self.description.as_deref())
    }

    fn extract_contract_type(&self) -> Option<ContractType> {
        self.contract_type
            .as_deref()
            .or(self.offer_type.as_deref())
            .map(contract::normalize_contract)
    }
}
