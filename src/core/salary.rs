use crate::models::{Currency, SalaryPeriod, SalaryRange};

/// A salary band converted to annual EUR figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnualSalary {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Parse a free-text salary expression ("45k-55k EUR/an", "3500€/mois",
/// "$60,000 yearly") into a salary band. Returns `None` when the text holds
/// no numeric value.
pub fn parse_salary_text(text: &str) -> Option<SalaryRange> {
    let normalized = text.trim().to_lowercase();

    let currency = if normalized.contains('$') || normalized.contains("usd") {
        Currency::Usd
    } else if normalized.contains('£') || normalized.contains("gbp") {
        Currency::Gbp
    } else {
        Currency::Eur
    };

    let period = if normalized.contains("mois")
        || normalized.contains("mensuel")
        || normalized.contains("month")
    {
        SalaryPeriod::Monthly
    } else if normalized.contains("jour") || normalized.contains("daily") || normalized.contains("day")
    {
        SalaryPeriod::Daily
    } else if normalized.contains("heure")
        || normalized.contains("horaire")
        || normalized.contains("hour")
    {
        SalaryPeriod::Hourly
    } else {
        SalaryPeriod::Yearly
    };

    let mut values = extract_numbers(&normalized);
    if values.is_empty() {
        return None;
    }

    // "45k" style figures are in thousands
    if normalized.contains('k') {
        for value in &mut values {
            *value *= 1000.0;
        }
    }

    let (min, max) = if values.len() == 1 {
        (Some(values[0]), None)
    } else {
        let lowest = values.iter().copied().fold(f64::INFINITY, f64::min);
        let highest = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (Some(lowest), Some(highest))
    };

    Some(SalaryRange {
        min,
        max,
        currency,
        period,
    })
}

/// All numeric tokens in the text, accepting "," or "." as decimal separator.
fn extract_numbers(text: &str) -> Vec<f64> {
    let mut numbers = Vec::new();
    let mut token = String::new();

    for ch in text.chars() {
        if ch.is_ascii_digit() {
            token.push(ch);
        } else if (ch == '.' || ch == ',') && !token.is_empty() && !token.contains('.') {
            token.push('.');
        } else {
            flush_token(&mut token, &mut numbers);
        }
    }
    flush_token(&mut token, &mut numbers);

    numbers
}

fn flush_token(token: &mut String, numbers: &mut Vec<f64>) {
    if token.is_empty() {
        return;
    }
    if let Ok(value) = token.trim_end_matches('.').parse() {
        numbers.push(value);
    }
    token.clear();
}

/// Convert a salary band to annual EUR using the fixed period and currency
/// factors.
pub fn to_annual_eur(range: &SalaryRange) -> AnnualSalary {
    let factor = range.period.annual_factor() * range.currency.eur_rate();
    AnnualSalary {
        min: range.min.map(|v| v * factor),
        max: range.max.map(|v| v * factor),
    }
}

/// Salary sub-score in [0, 1], comparing both bands in annual EUR.
///
/// A candidate without a stated minimum is assumed flexible; an offer without
/// a stated maximum is assumed negotiable. A candidate minimum inside the
/// offered band is a perfect match; up to 10% above the offer's maximum the
/// score follows the band overlap, and beyond that it degrades with the gap.
pub fn score_salary(candidate: Option<&SalaryRange>, offer: Option<&SalaryRange>) -> f64 {
    let (candidate, offer) = match (candidate, offer) {
        (Some(c), Some(o)) => (to_annual_eur(c), to_annual_eur(o)),
        _ => return 0.7,
    };

    let candidate_min = match candidate.min {
        Some(min) => min,
        // No stated minimum: flexible
        None => return 0.8,
    };

    let offer_max = match offer.max {
        Some(max) => max,
        None => {
            // Open-ended offer: negotiable around its floor
            return if candidate_min <= offer.min.unwrap_or(0.0) * 1.2 {
                0.9
            } else {
                0.6
            };
        }
    };

    // Candidate asks no more than the offered band
    if candidate_min <= offer.min.unwrap_or(0.0)
        && candidate.max.map_or(true, |max| max <= offer_max)
    {
        return 1.0;
    }

    // Slightly above the band but within the 10% negotiation margin
    if candidate_min <= offer_max * 1.1 {
        if candidate_min <= offer_max {
            let overlap = offer_max - candidate_min;
            let candidate_span = candidate.max.unwrap_or(candidate_min * 1.2) - candidate_min;
            if candidate_span <= 0.0 {
                // Zero-width expectation: the overlap ratio is meaningless
                return 0.7;
            }
            return (overlap / candidate_span).clamp(0.6, 1.0);
        }
        return 0.7;
    }

    // Candidate asks significantly more than the offer
    (1.0 - (candidate_min - offer_max) / offer_max).max(0.3)
}
