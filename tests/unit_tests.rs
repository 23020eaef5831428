// Unit tests for Nexten Match

use nexten_match::core::{
    contract::{normalize_contract, score_contract},
    distance::haversine_distance,
    experience::{parse_years, score_experience},
    location::{resolve_city, score_location},
    remote::{normalize_preference, score_remote},
    salary::{parse_salary_text, score_salary, to_annual_eur},
    skills::{normalize_skill_name, score_skills},
};
use nexten_match::models::{
    ContractType, Currency, GeoPoint, RemotePreference, SalaryPeriod, SalaryRange, Skill,
    SkillLevel,
};

#[test]
fn test_haversine_distance_zero() {
    let distance = haversine_distance(48.8566, 2.3522, 48.8566, 2.3522);
    assert!(distance < 0.01);
}

#[test]
fn test_haversine_distance_paris_to_lyon() {
    // Paris to Lyon is approximately 390 km
    let distance = haversine_distance(48.8566, 2.3522, 45.7578, 4.8320);
    assert!(distance > 350.0 && distance < 430.0, "got {}", distance);
}

#[test]
fn test_haversine_distance_is_symmetric() {
    let there = haversine_distance(48.8566, 2.3522, 43.2965, 5.3698);
    let back = haversine_distance(43.2965, 5.3698, 48.8566, 2.3522);
    assert!((there - back).abs() < 1e-9);
}

#[test]
fn test_skill_aliases_collapse_to_one_name() {
    assert_eq!(normalize_skill_name("JS"), normalize_skill_name("javascript"));
    assert_eq!(normalize_skill_name("Node JS"), normalize_skill_name("node"));
    assert_eq!(normalize_skill_name("nodejs"), "node.js");
    assert_eq!(normalize_skill_name("Vue"), "vue.js");
    assert_eq!(normalize_skill_name("PY"), "python");
}

#[test]
fn test_skills_score_alias_and_case_insensitive() {
    let candidate = vec![Skill::new("JS", SkillLevel::Advanced)];
    let required = vec![Skill::new("JavaScript", SkillLevel::Intermediate)];
    assert_eq!(score_skills(&candidate, &required), 1.0);
}

#[test]
fn test_experience_ratio_floor() {
    // 1 year against an 8-year requirement: max(0.1, 1/8)
    assert_eq!(score_experience(Some(1.0), Some(8.0)), 0.125);
}

#[test]
fn test_experience_qualitative_parsing() {
    assert_eq!(parse_years("junior"), Some(1.0));
    assert_eq!(parse_years("poste senior"), Some(5.0));
    assert_eq!(parse_years("2-5 ans d'expérience"), Some(2.0));
}

#[test]
fn test_city_resolution_substring() {
    let paris = resolve_city("Paris");
    let paris_15 = resolve_city("Paris 15e");
    assert!((paris.lat - paris_15.lat).abs() < 1e-9);

    // Unknown names fall back to Paris
    let unknown = resolve_city("Petaouchnok");
    assert!((unknown.lat - paris.lat).abs() < 1e-9);
}

#[test]
fn test_location_remote_offer_without_candidate_location() {
    let (score, distance) = score_location(None, false, None, true);
    assert_eq!(score, 0.9);
    assert!(distance.is_none());
}

#[test]
fn test_location_score_is_symmetric_in_distance() {
    let paris = GeoPoint { lat: 48.8566, lng: 2.3522 };
    let lyon = GeoPoint { lat: 45.7578, lng: 4.8320 };

    let (a, da) = score_location(Some(paris), false, Some(lyon), false);
    let (b, db) = score_location(Some(lyon), false, Some(paris), false);
    assert_eq!(a, b);
    assert!((da.unwrap() - db.unwrap()).abs() < 1e-9);
}

#[test]
fn test_remote_compatibility_matrix() {
    use RemotePreference::*;
    assert_eq!(score_remote(Some(FullRemote), Some(FullRemote)), 1.0);
    assert_eq!(score_remote(Some(FullRemote), Some(OnSite)), 0.3);
    assert_eq!(score_remote(Some(OnSite), Some(FullRemote)), 0.4);
    assert_eq!(score_remote(Some(NoPreference), Some(OnSite)), 0.9);
    assert_eq!(score_remote(None, None), 0.7);
}

#[test]
fn test_remote_normalization() {
    assert_eq!(normalize_preference("100% télétravail"), RemotePreference::FullRemote);
    assert_eq!(normalize_preference("hybrid"), RemotePreference::Hybrid);
    assert_eq!(normalize_preference("présentiel"), RemotePreference::OnSite);
    assert_eq!(normalize_preference("peu importe"), RemotePreference::NoPreference);
}

#[test]
fn test_contract_matrix_preserves_asymmetry() {
    use ContractType::*;
    assert_eq!(score_contract(Some(Permanent), Some(FixedTerm)), 0.6);
    assert_eq!(score_contract(Some(FixedTerm), Some(Permanent)), 0.8);
    assert_eq!(score_contract(Some(Freelance), Some(Temporary)), 0.7);
    assert_eq!(score_contract(Some(Temporary), Some(Freelance)), 0.6);
}

#[test]
fn test_contract_normalization() {
    assert_eq!(normalize_contract("CDI"), ContractType::Permanent);
    assert_eq!(normalize_contract("contrat à durée déterminée"), ContractType::FixedTerm);
    assert_eq!(normalize_contract("stage"), ContractType::Internship);
    assert_eq!(normalize_contract("alternance"), ContractType::Apprenticeship);
}

#[test]
fn test_salary_parsing_and_round_trip() {
    let range = parse_salary_text("3500-4000 € par mois").unwrap();
    assert_eq!(range.period, SalaryPeriod::Monthly);

    let annual = to_annual_eur(&range);
    assert_eq!(annual.min, Some(42_000.0));
    assert_eq!(annual.max, Some(48_000.0));

    // Monthly -> annual -> monthly recovers the original figures
    assert!((annual.min.unwrap() / 12.0 - 3_500.0).abs() < 1e-9);
    assert!((annual.max.unwrap() / 12.0 - 4_000.0).abs() < 1e-9);
}

#[test]
fn test_salary_currency_conversion() {
    let usd = SalaryRange {
        min: Some(100_000.0),
        max: Some(120_000.0),
        currency: Currency::Usd,
        period: SalaryPeriod::Yearly,
    };
    let annual = to_annual_eur(&usd);
    assert_eq!(annual.min, Some(85_000.0));
    assert_eq!(annual.max, Some(102_000.0));
}

#[test]
fn test_salary_band_compatibility() {
    let eur = |min: f64, max: f64| SalaryRange {
        min: Some(min),
        max: Some(max),
        currency: Currency::Eur,
        period: SalaryPeriod::Yearly,
    };

    // Candidate fits inside the offered band
    assert_eq!(score_salary(Some(&eur(45_000.0, 55_000.0)), Some(&eur(50_000.0, 60_000.0))), 1.0);

    // Cross-period comparison: 4k/month expectation against a 45-55k yearly offer
    let monthly = SalaryRange {
        min: Some(3_500.0),
        max: Some(4_000.0),
        currency: Currency::Eur,
        period: SalaryPeriod::Monthly,
    };
    assert_eq!(score_salary(Some(&monthly), Some(&eur(45_000.0, 55_000.0))), 1.0);
}
