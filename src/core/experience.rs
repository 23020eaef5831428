/// Years assumed when an experience field is present but unparseable.
pub const DEFAULT_EXPERIENCE_YEARS: f64 = 2.0;

/// Qualitative seniority labels and the years they stand for.
const SENIORITY_LABELS: &[(&[&str], f64)] = &[
    (&["débutant", "junior"], 1.0),
    (&["confirmé", "intermédiaire", "intermediate", "mid"], 3.0),
    (&["senior", "expérimenté", "experienced"], 5.0),
    (&["expert"], 8.0),
];

/// Parse an experience requirement out of free text.
///
/// A numeric value wins ("3 ans" -> 3, and a range like "2-5 ans" counts its
/// minimum); otherwise qualitative labels map to fixed years. Returns `None`
/// when the text carries no usable signal.
pub fn parse_years(text: &str) -> Option<f64> {
    let normalized = text.to_lowercase();

    if let Some(years) = first_number(&normalized) {
        return Some(years);
    }

    for (labels, years) in SENIORITY_LABELS {
        if labels.iter().any(|label| normalized.contains(label)) {
            return Some(*years);
        }
    }

    None
}

/// First numeric token in the text, accepting "," or "." as decimal separator.
fn first_number(text: &str) -> Option<f64> {
    let mut token = String::new();
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            token.push(ch);
        } else if (ch == '.' || ch == ',') && !token.is_empty() && !token.contains('.') {
            token.push('.');
        } else if !token.is_empty() {
            break;
        }
    }
    token.trim_end_matches('.').parse().ok()
}

/// Experience sub-score in [0, 1].
///
/// Candidates at or above the requirement score full marks, with a slight
/// overqualification penalty on junior positions. Below the requirement the
/// score follows the ratio of candidate to required years in bands. Either
/// side unspecified is neutral.
pub fn score_experience(candidate_years: Option<f64>, required_years: Option<f64>) -> f64 {
    let (candidate, required) = match (candidate_years, required_years) {
        (Some(c), Some(r)) => (c, r),
        _ => return 0.5,
    };

    if candidate >= required {
        // Overqualified for a junior position
        if required < 2.0 && candidate > 5.0 {
            return 0.8;
        }
        return 1.0;
    }

    let ratio = candidate / required;
    if ratio >= 0.8 {
        0.9
    } else if ratio >= 0.6 {
        0.7
    } else {
        ratio.max(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_years_plain_number() {
        assert_eq!(parse_years("3 ans"), Some(3.0));
        assert_eq!(parse_years("5 years"), Some(5.0));
        assert_eq!(parse_years("7"), Some(7.0));
        assert_eq!(parse_years("2,5 ans"), Some(2.5));
    }

    #[test]
    fn test_parse_years_range_takes_minimum() {
        assert_eq!(parse_years("2-5 ans"), Some(2.0));
        assert_eq!(parse_years("3 - 6 years"), Some(3.0));
    }

    #[test]
    fn test_parse_years_qualitative_labels() {
        assert_eq!(parse_years("débutant accepté"), Some(1.0));
        assert_eq!(parse_years("profil junior"), Some(1.0));
        assert_eq!(parse_years("confirmé"), Some(3.0));
        assert_eq!(parse_years("senior"), Some(5.0));
        assert_eq!(parse_years("expert"), Some(8.0));
    }

    #[test]
    fn test_parse_years_no_signal() {
        assert_eq!(parse_years("selon profil"), None);
        assert_eq!(parse_years(""), None);
    }

    #[test]
    fn test_score_meets_requirement() {
        assert_eq!(score_experience(Some(3.0), Some(2.0)), 1.0);
        assert_eq!(score_experience(Some(2.0), Some(2.0)), 1.0);
    }

    #[test]
    fn test_score_overqualification_penalty() {
        // Junior position, heavily experienced candidate
        assert_eq!(score_experience(Some(6.0), Some(1.0)), 0.8);
        // At exactly 5 years the penalty does not apply
        assert_eq!(score_experience(Some(5.0), Some(1.0)), 1.0);
        // Requirement of 2+ years never penalizes
        assert_eq!(score_experience(Some(10.0), Some(2.0)), 1.0);
    }

    #[test]
    fn test_score_below_requirement_bands() {
        // ratio 0.8
        assert_eq!(score_experience(Some(4.0), Some(5.0)), 0.9);
        // ratio 0.6
        assert_eq!(score_experience(Some(3.0), Some(5.0)), 0.7);
        // ratio 0.5
        assert_eq!(score_experience(Some(2.0), Some(4.0)), 0.5);
        // ratio 1/8 = 0.125, above the 0.1 floor
        assert_eq!(score_experience(Some(1.0), Some(8.0)), 0.125);
        // floor at 0.1
        assert_eq!(score_experience(Some(0.5), Some(10.0)), 0.1);
    }

    #[test]
    fn test_score_missing_data_is_neutral() {
        assert_eq!(score_experience(None, Some(3.0)), 0.5);
        assert_eq!(score_experience(Some(3.0), None), 0.5);
        assert_eq!(score_experience(None, None), 0.5);
    }
}
