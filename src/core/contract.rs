use crate::models::ContractType;

/// Compatibility of a candidate contract preference (row) against an offer
/// contract (column), both ordered permanent, fixed-term, freelance,
/// internship, apprenticeship, temporary.
///
/// The table is intentionally NOT symmetric: a permanent-seeking candidate on
/// a fixed-term offer scores 0.6 while a fixed-term-seeking candidate on a
/// permanent offer scores 0.8 (an upgrade). Values are product-defined and
/// preserved as given.
const CONTRACT_COMPATIBILITY: [[f64; 6]; 6] = [
    // candidate wants permanent (CDI)
    [1.0, 0.6, 0.4, 0.2, 0.3, 0.3],
    // candidate wants fixed-term (CDD)
    [0.8, 1.0, 0.5, 0.2, 0.3, 0.7],
    // candidate wants freelance
    [0.5, 0.6, 1.0, 0.2, 0.2, 0.7],
    // candidate wants internship
    [0.3, 0.3, 0.2, 1.0, 0.7, 0.2],
    // candidate wants apprenticeship
    [0.4, 0.4, 0.2, 0.7, 1.0, 0.2],
    // candidate wants temporary work
    [0.3, 0.7, 0.6, 0.2, 0.2, 1.0],
];

/// Contract-type sub-score in [0, 1]. Missing data on either side is neutral.
pub fn score_contract(candidate: Option<ContractType>, offer: Option<ContractType>) -> f64 {
    let (candidate, offer) = match (candidate, offer) {
        (Some(c), Some(o)) => (c, o),
        _ => return 0.7,
    };

    if candidate == offer {
        return 1.0;
    }

    CONTRACT_COMPATIBILITY[candidate as usize][offer as usize]
}

/// Normalize a free-text contract label to the fixed vocabulary. Unrecognized
/// text counts as permanent, by far the most common contract.
pub fn normalize_contract(text: &str) -> ContractType {
    let normalized = text.trim().to_lowercase();

    // "indéterminée" before "déterminée": the former contains the latter
    if normalized.contains("cdi")
        || normalized.contains("indéterminée")
        || normalized.contains("indeterminee")
        || normalized.contains("permanent")
    {
        return ContractType::Permanent;
    }

    if normalized.contains("cdd")
        || normalized.contains("déterminée")
        || normalized.contains("determinee")
        || normalized.contains("fixed-term")
        || normalized.contains("fixed term")
    {
        return ContractType::FixedTerm;
    }

    if normalized.contains("freelance")
        || normalized.contains("consultant")
        || normalized.contains("indépendant")
        || normalized.contains("independant")
    {
        return ContractType::Freelance;
    }

    if normalized.contains("stage") || normalized.contains("intern") {
        return ContractType::Internship;
    }

    if normalized.contains("alternance")
        || normalized.contains("apprentissage")
        || normalized.contains("apprentice")
    {
        return ContractType::Apprenticeship;
    }

    if normalized.contains("intérim")
        || normalized.contains("interim")
        || normalized.contains("temporaire")
        || normalized.contains("temp")
    {
        return ContractType::Temporary;
    }

    ContractType::Permanent
}
