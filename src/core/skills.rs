use std::collections::HashSet;

use crate::models::{Skill, SkillLevel};

/// Credit floor for a skill matched at a lower level than required.
const MIN_LEVEL_CREDIT: f64 = 0.3;
/// Credit lost per level of gap below the required proficiency.
const LEVEL_GAP_PENALTY: f64 = 0.3;
/// Bonus granted per relevant extra skill, and its cap.
const EXTRA_SKILL_BONUS: f64 = 0.05;
const EXTRA_SKILL_BONUS_CAP: f64 = 0.2;

/// Common shorthand and vendor spellings mapped onto one canonical name.
/// Keys are already in normalized (lowercased, punctuation-stripped) form.
const SKILL_ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("reactjs", "react"),
    ("react js", "react"),
    ("node", "node.js"),
    ("nodejs", "node.js"),
    ("node js", "node.js"),
    ("vue", "vue.js"),
    ("vuejs", "vue.js"),
    ("vue js", "vue.js"),
    ("angular", "angular.js"),
    ("angularjs", "angular.js"),
    ("angular js", "angular.js"),
    ("py", "python"),
    ("golang", "go"),
    ("aws", "amazon web services"),
    ("azure", "microsoft azure"),
    ("gcp", "google cloud platform"),
    ("postgre", "postgresql"),
    ("mongo", "mongodb"),
    ("html", "html5"),
    ("css", "css3"),
    ("ui", "user interface"),
    ("ux", "user experience"),
];

/// Technology adjacency used for the extra-skills bonus: a candidate skill
/// listed against a required skill counts as relevant even though the offer
/// did not ask for it.
const TECH_ADJACENCY: &[(&str, &[&str])] = &[
    (
        "javascript",
        &["typescript", "react", "angular.js", "vue.js", "node.js", "express", "jquery", "webpack", "babel"],
    ),
    ("typescript", &["javascript", "react", "angular.js", "node.js"]),
    ("react", &["javascript", "typescript", "redux", "next.js", "gatsby"]),
    ("angular.js", &["javascript", "typescript", "rxjs"]),
    ("vue.js", &["javascript", "vuex", "nuxt.js"]),
    ("node.js", &["javascript", "typescript", "express", "mongodb", "sql", "rest api"]),
    ("html5", &["css3", "javascript", "responsive design"]),
    ("css3", &["html5", "sass", "less", "bootstrap", "tailwind"]),
    (
        "python",
        &["django", "flask", "fastapi", "pandas", "numpy", "scikit-learn", "tensorflow", "pytorch"],
    ),
    ("java", &["spring", "hibernate", "maven", "gradle", "junit"]),
    ("csharp", &["dotnet", "asp.net", "entity framework", "linq", "xamarin"]),
    ("php", &["laravel", "symfony", "wordpress", "mysql"]),
    ("ruby", &["rails", "sinatra"]),
    ("sql", &["mysql", "postgresql", "oracle", "sql server"]),
    ("nosql", &["mongodb", "cassandra", "redis", "elasticsearch"]),
];

/// Canonicalize a skill name: lowercase, punctuation stripped to spaces,
/// whitespace collapsed, then alias-mapped. "JS", "js" and "javascript" all
/// yield "javascript".
pub fn normalize_skill_name(name: &str) -> String {
    let mut cleaned = String::with_capacity(name.len());
    for ch in name.trim().to_lowercase().chars() {
        if ch.is_alphanumeric() || ch == '_' {
            cleaned.push(ch);
        } else {
            cleaned.push(' ');
        }
    }
    let normalized = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    for (alias, canonical) in SKILL_ALIASES {
        if normalized == *alias {
            return (*canonical).to_string();
        }
    }
    normalized
}

fn normalize_skill(skill: &Skill) -> Skill {
    Skill {
        name: normalize_skill_name(&skill.name),
        level: skill.level,
    }
}

/// All technologies adjacent to the given required skill names.
fn related_technologies(required_names: &HashSet<String>) -> HashSet<&'static str> {
    let mut related = HashSet::new();
    for (tech, adjacent) in TECH_ADJACENCY {
        if required_names.contains(*tech) {
            related.extend(adjacent.iter().copied());
        }
    }
    related
}

/// Skills sub-score in [0, 1].
///
/// Each required skill earns full credit when the candidate matches it at the
/// required level or above, partial credit (floored at 0.3) when matched at a
/// lower level, and nothing when missing. Extra candidate skills adjacent to
/// the required stack add a capped bonus.
pub fn score_skills(candidate_skills: &[Skill], required_skills: &[Skill]) -> f64 {
    if candidate_skills.is_empty() {
        return 0.0;
    }
    if required_skills.is_empty() {
        // Nothing to compare against: neutral
        return 0.5;
    }

    let candidate: Vec<Skill> = candidate_skills.iter().map(normalize_skill).collect();
    let required: Vec<Skill> = required_skills.iter().map(normalize_skill).collect();

    let mut weighted_match = 0.0;
    for req in &required {
        if let Some(cand) = candidate.iter().find(|c| c.name == req.name) {
            if cand.level >= req.level {
                weighted_match += 1.0;
            } else {
                let gap = f64::from(req.level.ordinal() - cand.level.ordinal());
                weighted_match += (1.0 - gap * LEVEL_GAP_PENALTY).max(MIN_LEVEL_CREDIT);
            }
        }
    }

    let match_ratio = weighted_match / required.len() as f64;

    let required_names: HashSet<String> = required.iter().map(|s| s.name.clone()).collect();
    let related = related_technologies(&required_names);
    let relevant_extras = candidate
        .iter()
        .filter(|c| !required_names.contains(&c.name) && related.contains(c.name.as_str()))
        .count();
    let bonus = (relevant_extras as f64 * EXTRA_SKILL_BONUS).min(EXTRA_SKILL_BONUS_CAP);

    (match_ratio + bonus).min(1.0)
}

/// Required skill names the candidate covers, in canonical form.
pub fn matched_skills(candidate_skills: &[Skill], required_skills: &[Skill]) -> Vec<String> {
    let candidate_names: HashSet<String> = candidate_skills
        .iter()
        .map(|s| normalize_skill_name(&s.name))
        .collect();

    required_skills
        .iter()
        .map(|s| normalize_skill_name(&s.name))
        .filter(|name| candidate_names.contains(name))
        .collect()
}

/// Required skill names the candidate lacks, in canonical form.
pub fn missing_skills(candidate_skills: &[Skill], required_skills: &[Skill]) -> Vec<String> {
    let candidate_names: HashSet<String> = candidate_skills
        .iter()
        .map(|s| normalize_skill_name(&s.name))
        .collect();

    required_skills
        .iter()
        .map(|s| normalize_skill_name(&s.name))
        .filter(|name| !candidate_names.contains(name))
        .collect()
}
