use serde::Serialize;

use crate::catalog::RoleProfile;
use crate::matching::normalize::{contains_keyword, normalize};

/// Match score of one role for one resume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub role: String,
    /// Percentage of the role's keywords present in the resume, 0.0 to 100.0, two decimals.
    pub score: f64,
    /// Keywords found, in catalog keyword order.
    pub matched: Vec<String>,
    /// Keywords not found, in catalog keyword order.
    pub missing: Vec<String>,
}

/// Scores `resume_text` against a single role.
///
/// Each keyword counts once however often it appears. An empty resume scores 0.0.
pub fn score(resume_text: &str, profile: &RoleProfile) -> f64 {
    match_role(&normalize(resume_text), profile).score
}

/// Scores every role in `profiles` against `resume_text`, in catalog order.
pub fn match_all(resume_text: &str, profiles: &[RoleProfile]) -> Vec<MatchResult> {
    let normalized = normalize(resume_text);
    profiles
        .iter()
        .map(|profile| match_role(&normalized, profile))
        .collect()
}

fn match_role(normalized_resume: &str, profile: &RoleProfile) -> MatchResult {
    let (matched, missing): (Vec<String>, Vec<String>) = profile
        .keywords
        .iter()
        .cloned()
        .partition(|keyword| contains_keyword(normalized_resume, keyword));

    let total = profile.keywords.len();
    let score = if total == 0 {
        0.0
    } else {
        round2(100.0 * matched.len() as f64 / total as f64)
    };

    MatchResult {
        role: profile.name.clone(),
        score,
        matched,
        missing,
    }
}

/// Rounds to two decimal places, halves to even (3.125 becomes 3.12).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
