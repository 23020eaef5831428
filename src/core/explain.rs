use crate::models::{Explanation, ExplanationKind, MatchDetails};

/// Build the textual summaries for a scored pair. Texts are derived from
/// fixed score bands per criterion, so the output is deterministic for a
/// given breakdown.
pub fn generate_explanations(details: &MatchDetails, is_relevant: bool) -> Vec<Explanation> {
    let mut explanations = Vec::with_capacity(5);

    explanations.push(global_explanation(is_relevant));
    explanations.push(skills_explanation(details));
    explanations.push(experience_explanation(details));
    explanations.push(location_explanation(details));
    explanations.push(salary_explanation(details));

    explanations
}

fn global_explanation(is_relevant: bool) -> Explanation {
    let text = if is_relevant {
        "This offer is a strong fit for your profile, with particularly high compatibility on key criteria."
    } else {
        "This offer only partially matches your profile, with gaps on some important criteria."
    };
    Explanation::new(ExplanationKind::Global, text)
}

fn skills_explanation(details: &MatchDetails) -> Explanation {
    let score = details.skills.score;
    let text = if score >= 80 {
        format!("Your skills line up very well with the ones required ({}%).", score)
    } else if score >= 60 {
        format!("You cover a good share of the required skills ({}%).", score)
    } else {
        format!("Some skills required for this position appear to be missing ({}%).", score)
    };

    let mut explanation = Explanation::new(ExplanationKind::Skills, text);
    explanation.matched_skills = details.skills.matched_skills.clone();
    explanation.missing_skills = details.skills.missing_skills.clone();
    explanation
}

fn experience_explanation(details: &MatchDetails) -> Explanation {
    let score = details.experience.score;
    let text = if score >= 80 {
        format!("Your experience level matches the expectations very well ({}%).", score)
    } else if score >= 60 {
        format!("Your experience is close to what the position asks for ({}%).", score)
    } else if score >= 40 {
        format!("Your experience level is slightly below the expectations ({}%).", score)
    } else {
        format!("Your experience level looks insufficient for this position ({}%).", score)
    };
    Explanation::new(ExplanationKind::Experience, text)
}

fn location_explanation(details: &MatchDetails) -> Explanation {
    let score = details.location.score;
    let distance = details.location.distance_km.map(|d| d.round() as i64);

    let text = if score >= 90 {
        "The position's location is ideal for your situation.".to_string()
    } else if score >= 70 {
        match distance {
            Some(km) => format!("The commute is reasonable (about {} km).", km),
            None => "The position's location is a reasonable match.".to_string(),
        }
    } else if score >= 50 {
        match distance {
            Some(km) => format!("The position would mean a significant commute (about {} km).", km),
            None => "The position's location could not be fully assessed.".to_string(),
        }
    } else {
        match distance {
            Some(km) => format!("The position is far from your current location (about {} km).", km),
            None => "The position's location appears far from yours.".to_string(),
        }
    };
    Explanation::new(ExplanationKind::Location, text)
}

fn salary_explanation(details: &MatchDetails) -> Explanation {
    let score = details.salary.score;
    let text = if score >= 90 {
        "The salary expectations are perfectly aligned."
    } else if score >= 70 {
        "The offered salary roughly matches your expectations, with a slight difference."
    } else if score >= 50 {
        "There is a moderate gap between your salary expectation and what is offered."
    } else {
        "There is a substantial gap between your salary expectation and what is offered."
    };
    Explanation::new(ExplanationKind::Salary, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CriterionDetail, LocationDetail, SalaryDetail, SkillsDetail};

    fn details(skills: u8, experience: u8, location: u8, salary: u8) -> MatchDetails {
        MatchDetails {
            skills: SkillsDetail {
                score: skills,
                weight: 35.0,
                contribution: 0,
                matched_skills: vec!["javascript".to_string()],
                missing_skills: vec!["react".to_string()],
            },
            experience: CriterionDetail {
                score: experience,
                weight: 20.0,
                contribution: 0,
            },
            location: LocationDetail {
                score: location,
                weight: 15.0,
                contribution: 0,
                distance_km: Some(23.4),
            },
            remote_preference: CriterionDetail {
                score: 70,
                weight: 10.0,
                contribution: 0,
            },
            contract_type: CriterionDetail {
                score: 70,
                weight: 10.0,
                contribution: 0,
            },
            salary: SalaryDetail {
                score: salary,
                weight: 10.0,
                contribution: 0,
                candidate_salary: None,
                offer_salary: None,
            },
        }
    }

    #[test]
    fn test_covers_all_criteria() {
        let explanations = generate_explanations(&details(90, 90, 95, 95), true);
        let kinds: Vec<ExplanationKind> = explanations.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ExplanationKind::Global,
                ExplanationKind::Skills,
                ExplanationKind::Experience,
                ExplanationKind::Location,
                ExplanationKind::Salary,
            ]
        );
    }

    #[test]
    fn test_skills_explanation_carries_breakdown() {
        let explanations = generate_explanations(&details(85, 50, 50, 50), false);
        let skills = &explanations[1];
        assert_eq!(skills.matched_skills, vec!["javascript"]);
        assert_eq!(skills.missing_skills, vec!["react"]);
        assert!(skills.text.contains("85%"));
    }

    #[test]
    fn test_location_band_includes_distance() {
        let explanations = generate_explanations(&details(85, 85, 80, 85), true);
        let location = &explanations[3];
        assert!(location.text.contains("23 km"), "got: {}", location.text);
    }

    #[test]
    fn test_band_boundaries() {
        // 79 and 80 fall on different sides of the skills band
        let low = generate_explanations(&details(79, 50, 50, 50), false);
        let high = generate_explanations(&details(80, 50, 50, 50), false);
        assert_ne!(low[1].text, high[1].text);

        // 39 and 40 cross the lowest experience band
        let low = generate_explanations(&details(50, 39, 50, 50), false);
        let high = generate_explanations(&details(50, 40, 50, 50), false);
        assert_ne!(low[2].text, high[2].text);
    }
}
