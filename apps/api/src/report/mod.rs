// Reporter: chooses what an analysis shows and hands it to a renderer.
// Selection lives here; the PDF and text byte formats live in render.rs / pdf.rs.

pub mod frequency;
pub mod pdf;
pub mod render;
pub mod summary;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::RoleCatalog;
use crate::matching::{AnalysisOutcome, MatchResult};

pub use frequency::{skill_comparison, SkillFrequency, SKILL_COMPARISON_KEYWORDS};
pub use render::{ReportFormat, ReportRenderer, TextReportRenderer};
pub use pdf::PdfReportRenderer;
pub use summary::{format_score, ReportSummary};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    #[error("Render task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Everything the page and the downloadable report display for one analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub best_match: MatchResult,
    /// Headline roles, best first.
    pub top_matches: Vec<MatchResult>,
    /// All roles, best first.
    pub scores: Vec<MatchResult>,
    pub skill_comparison: Vec<SkillFrequency>,
    pub summary: ReportSummary,
}

/// Selects the displayed data from a ranked outcome.
///
/// The skill comparison counts against the best-matched role's description.
pub fn build_report(
    outcome: &AnalysisOutcome,
    catalog: &RoleCatalog,
    resume_text: &str,
    top_n: usize,
) -> AnalysisReport {
    let description = catalog
        .get(&outcome.best_match.role)
        .map(|profile| profile.description.as_str())
        .unwrap_or_default();

    AnalysisReport {
        best_match: outcome.best_match.clone(),
        top_matches: outcome.top_n(top_n).to_vec(),
        scores: outcome.results.clone(),
        skill_comparison: skill_comparison(resume_text, description),
        summary: ReportSummary::new(outcome, catalog),
    }
}
