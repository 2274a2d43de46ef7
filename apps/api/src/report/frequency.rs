//! Skill-frequency comparison between the resume and the best role's description.
//!
//! Independent of the match score: these keywords are not any role's scoring
//! keywords, and occurrences are counted rather than tested for presence.

use serde::Serialize;

use crate::matching::normalize::{count_keyword, normalize};

pub const SKILL_COMPARISON_KEYWORDS: [&str; 6] = [
    "Python",
    "SQL",
    "Machine Learning",
    "Communication",
    "HTML",
    "CSS",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillFrequency {
    pub keyword: String,
    pub resume_count: usize,
    pub description_count: usize,
}

pub fn skill_comparison(resume_text: &str, description: &str) -> Vec<SkillFrequency> {
    let resume = normalize(resume_text);
    let description = normalize(description);

    SKILL_COMPARISON_KEYWORDS
        .iter()
        .map(|keyword| SkillFrequency {
            keyword: keyword.to_string(),
            resume_count: count_keyword(&resume, keyword),
            description_count: count_keyword(&description, keyword),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_for<'a>(rows: &'a [SkillFrequency], keyword: &str) -> &'a SkillFrequency {
        rows.iter().find(|r| r.keyword == keyword).unwrap()
    }

    #[test]
    fn test_counts_occurrences_not_presence() {
        let rows = skill_comparison("CSS grid, css flexbox, Tailwind CSS", "");
        assert_eq!(count_for(&rows, "CSS").resume_count, 3);
        assert_eq!(count_for(&rows, "HTML").resume_count, 0);
    }

    #[test]
    fn test_rows_follow_fixed_keyword_order() {
        let rows = skill_comparison("", "");
        let keywords: Vec<&str> = rows.iter().map(|r| r.keyword.as_str()).collect();
        assert_eq!(keywords, SKILL_COMPARISON_KEYWORDS.to_vec());
        assert!(rows.iter().all(|r| r.resume_count == 0 && r.description_count == 0));
    }

    #[test]
    fn test_description_counted_case_insensitively() {
        let rows = skill_comparison(
            "",
            "Develop machine learning models using Python, TensorFlow, and NLP tools like spaCy.",
        );
        assert_eq!(count_for(&rows, "Machine Learning").description_count, 1);
        assert_eq!(count_for(&rows, "Python").description_count, 1);
        assert_eq!(count_for(&rows, "SQL").description_count, 0);
    }

    #[test]
    fn test_multi_word_keyword_counted() {
        let rows = skill_comparison("Communication skills; written communication", "");
        assert_eq!(count_for(&rows, "Communication").resume_count, 2);
    }
}
