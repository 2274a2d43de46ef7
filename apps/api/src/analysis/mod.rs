// Analysis API: upload → extract → score → rank → report.

pub mod handlers;
pub mod upload;

use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::{analyze, MatchResult};
use crate::report::{build_report, AnalysisReport, ReportSummary, SkillFrequency};
use crate::state::AppState;

/// JSON body returned by the analyze endpoints.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis_id: Uuid,
    /// Length of the extracted text; 0 means nothing could be read from the upload.
    pub resume_chars: usize,
    pub best_match: MatchResult,
    pub top_matches: Vec<MatchResult>,
    pub scores: Vec<MatchResult>,
    pub skill_comparison: Vec<SkillFrequency>,
    pub summary: ReportSummary,
}

impl AnalysisResponse {
    fn new(analysis_id: Uuid, resume_chars: usize, report: AnalysisReport) -> Self {
        Self {
            analysis_id,
            resume_chars,
            best_match: report.best_match,
            top_matches: report.top_matches,
            scores: report.scores,
            skill_comparison: report.skill_comparison,
            summary: report.summary,
        }
    }
}

/// Runs the matching core on already-extracted text and selects the report data.
pub fn run_analysis(state: &AppState, resume_text: &str) -> Result<(Uuid, AnalysisReport), AppError> {
    let analysis_id = Uuid::new_v4();
    let outcome = analyze(resume_text, &state.catalog)?;
    let report = build_report(&outcome, &state.catalog, resume_text, state.config.top_n);

    tracing::info!(
        %analysis_id,
        resume_chars = resume_text.chars().count(),
        best_role = %report.best_match.role,
        best_score = report.best_match.score,
        "Resume analyzed"
    );

    Ok((analysis_id, report))
}
