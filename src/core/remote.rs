use crate::models::RemotePreference;

/// Compatibility of a candidate preference (row) against an offer policy
/// (column: full-remote, hybrid, on-site). Exact matches score 1.0 and the
/// no-preference row accepts anything at 0.9.
const REMOTE_COMPATIBILITY: [[f64; 3]; 4] = [
    // candidate wants full remote
    [1.0, 0.7, 0.3],
    // candidate wants hybrid
    [0.8, 1.0, 0.7],
    // candidate wants on-site
    [0.4, 0.7, 1.0],
    // no preference
    [0.9, 0.9, 0.9],
];

/// Remote-preference sub-score in [0, 1]. Missing data on either side, or an
/// offer policy outside the table, is neutral.
pub fn score_remote(
    candidate: Option<RemotePreference>,
    offer: Option<RemotePreference>,
) -> f64 {
    let (candidate, offer) = match (candidate, offer) {
        (Some(c), Some(o)) => (c, o),
        _ => return 0.7,
    };

    // An offer policy of "no preference" has no column in the table
    if offer == RemotePreference::NoPreference {
        return 0.7;
    }

    REMOTE_COMPATIBILITY[candidate as usize][offer as usize]
}

/// Normalize a free-text remote-work label. Unrecognized text counts as no
/// preference.
pub fn normalize_preference(text: &str) -> RemotePreference {
    let normalized = text.trim().to_lowercase();

    let mentions_remote = normalized.contains("télétravail")
        || normalized.contains("remote")
        || normalized.contains("à distance")
        || normalized.contains("a distance");
    let mentions_full = normalized.contains("100%")
        || normalized.contains("full")
        || normalized.contains("complet")
        || normalized.contains("total");
    if mentions_remote && mentions_full {
        return RemotePreference::FullRemote;
    }

    if normalized.contains("hybride")
        || normalized.contains("hybrid")
        || normalized.contains("mixte")
        || normalized.contains("partiel")
    {
        return RemotePreference::Hybrid;
    }

    if normalized.contains("sur site")
        || normalized.contains("on site")
        || normalized.contains("on-site")
        || normalized.contains("présentiel")
    {
        return RemotePreference::OnSite;
    }

    RemotePreference::NoPreference
}

/// Infer an offer's remote policy from its title and description. Returns
/// `None` only when neither text is available; text without any remote signal
/// counts as on-site.
pub fn infer_policy(title: Option<&str>, description: Option<&str>) -> Option<RemotePreference> {
    if title.is_none() && description.is_none() {
        return None;
    }

    if let Some(title) = title {
        let title = title.to_lowercase();
        if title.contains("télétravail") || title.contains("remote") || title.contains("à distance")
        {
            return Some(RemotePreference::FullRemote);
        }
        if title.contains("hybride") || title.contains("hybrid") {
            return Some(RemotePreference::Hybrid);
        }
    }

    if let Some(description) = description {
        let description = description.to_lowercase();
        if mentions_full_remote(&description) {
            return Some(RemotePreference::FullRemote);
        }
        if description.contains("hybride")
            || description.contains("hybrid")
            || description.contains("télétravail partiel")
            || description.contains("jour de télétravail")
            || description.contains("jours de télétravail")
        {
            return Some(RemotePreference::Hybrid);
        }
        if description.contains("sur site")
            || description.contains("on site")
            || description.contains("présentiel complet")
        {
            return Some(RemotePreference::OnSite);
        }
    }

    Some(RemotePreference::OnSite)
}

/// Whether an offer is fully remote, from its explicit type or its text.
pub fn is_fully_remote(
    offer_type: Option<&str>,
    title: Option<&str>,
    description: Option<&str>,
) -> bool {
    if let Some(offer_type) = offer_type {
        let offer_type = offer_type.trim().to_lowercase();
        if offer_type == "remote" || offer_type == "télétravail" {
            return true;
        }
    }

    if let Some(title) = title {
        let title = title.to_lowercase();
        if title.contains("télétravail") || title.contains("remote") || title.contains("à distance")
        {
            return true;
        }
    }

    if let Some(description) = description {
        if mentions_full_remote(&description.to_lowercase()) {
            return true;
        }
    }

    false
}

fn mentions_full_remote(text: &str) -> bool {
    let squashed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    squashed.contains("100% télétravail")
        || squashed.contains("100%télétravail")
        || squashed.contains("full remote")
        || squashed.contains("entièrement à distance")
}

#[cfg(test)]
mod tests {
    use super::*;
    use RemotePreference::*;

    #[test]
    fn test_exact_matches_score_full() {
        assert_eq!(score_remote(Some(FullRemote), Some(FullRemote)), 1.0);
        assert_eq!(score_remote(Some(Hybrid), Some(Hybrid)), 1.0);
        assert_eq!(score_remote(Some(OnSite), Some(OnSite)), 1.0);
    }

    #[test]
    fn test_no_preference_accepts_anything() {
        assert_eq!(score_remote(Some(NoPreference), Some(FullRemote)), 0.9);
        assert_eq!(score_remote(Some(NoPreference), Some(Hybrid)), 0.9);
        assert_eq!(score_remote(Some(NoPreference), Some(OnSite)), 0.9);
    }

    #[test]
    fn test_mismatch_scores() {
        // Remote-first candidate against an on-site offer is the worst case
        assert_eq!(score_remote(Some(FullRemote), Some(OnSite)), 0.3);
        assert_eq!(score_remote(Some(OnSite), Some(FullRemote)), 0.4);
        assert_eq!(score_remote(Some(Hybrid), Some(FullRemote)), 0.8);
    }

    #[test]
    fn test_missing_data_is_neutral() {
        assert_eq!(score_remote(None, Some(Hybrid)), 0.7);
        assert_eq!(score_remote(Some(Hybrid), None), 0.7);
        assert_eq!(score_remote(Some(Hybrid), Some(NoPreference)), 0.7);
    }

    #[test]
    fn test_normalize_preference() {
        assert_eq!(normalize_preference("100% télétravail"), FullRemote);
        assert_eq!(normalize_preference("Full remote"), FullRemote);
        assert_eq!(normalize_preference("hybride"), Hybrid);
        assert_eq!(normalize_preference("hybrid"), Hybrid);
        assert_eq!(normalize_preference("télétravail partiel"), Hybrid);
        assert_eq!(normalize_preference("sur site"), OnSite);
        assert_eq!(normalize_preference("présentiel"), OnSite);
        assert_eq!(normalize_preference("peu importe"), NoPreference);
        assert_eq!(normalize_preference("whatever"), NoPreference);
    }

    #[test]
    fn test_infer_policy_from_text() {
        assert_eq!(
            infer_policy(Some("Développeur full-stack - télétravail"), None),
            Some(FullRemote)
        );
        assert_eq!(
            infer_policy(Some("Développeur backend"), Some("2 jours de télétravail par semaine")),
            Some(Hybrid)
        );
        assert_eq!(
            infer_policy(Some("Développeur backend"), Some("Poste basé à Lyon")),
            Some(OnSite)
        );
        assert_eq!(infer_policy(None, None), None);
    }

    #[test]
    fn test_is_fully_remote() {
        assert!(is_fully_remote(Some("remote"), None, None));
        assert!(is_fully_remote(Some("télétravail"), None, None));
        assert!(is_fully_remote(None, Some("Ingénieur data - remote"), None));
        assert!(is_fully_remote(None, None, Some("Poste en full remote")));
        assert!(is_fully_remote(None, None, Some("100%  télétravail possible")));
        assert!(!is_fully_remote(Some("cdi"), Some("Ingénieur data"), Some("Poste à Lyon")));
    }
}
