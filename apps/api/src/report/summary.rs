use serde::Serialize;

use crate::catalog::RoleCatalog;
use crate::matching::AnalysisOutcome;

pub const REPORT_TITLE: &str = "Smart Resume Analyzer - Match Report";
const SCORES_HEADING: &str = "Match Scores:";

/// Plain-text body of the downloadable report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub title: String,
    pub best_match_line: String,
    pub scores_heading: String,
    /// One line per role in catalog order, not ranked.
    pub score_lines: Vec<String>,
}

impl ReportSummary {
    pub fn new(outcome: &AnalysisOutcome, catalog: &RoleCatalog) -> Self {
        let best = &outcome.best_match;
        let score_lines = catalog
            .profiles()
            .iter()
            .filter_map(|profile| outcome.results.iter().find(|r| r.role == profile.name))
            .map(|result| format!("{}: {}%", result.role, format_score(result.score)))
            .collect();

        Self {
            title: REPORT_TITLE.to_string(),
            best_match_line: format!(
                "Best Matched Role: {} ({}%)",
                best.role,
                format_score(best.score)
            ),
            scores_heading: SCORES_HEADING.to_string(),
            score_lines,
        }
    }

    pub fn lines(&self) -> Vec<&str> {
        let mut lines = vec![
            self.title.as_str(),
            self.best_match_line.as_str(),
            self.scores_heading.as_str(),
        ];
        lines.extend(self.score_lines.iter().map(String::as_str));
        lines
    }
}

/// Formats a percentage the way the report has always shown it:
/// whole numbers keep one decimal (`50.0`), others use the shortest form (`16.67`).
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        format!("{score}")
    }
}
