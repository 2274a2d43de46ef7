//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::upload::read_resume_upload;
use crate::analysis::{run_analysis, AnalysisResponse};
use crate::catalog::RoleProfile;
use crate::errors::AppError;
use crate::extraction::extract_resume_text;
use crate::report::{ReportError, ReportFormat};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub format: ReportFormat,
}

#[derive(Debug, Serialize)]
pub struct RoleListResponse {
    pub count: usize,
    pub roles: Vec<RoleProfile>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart upload with a `resume` file. Returns scores for every role.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let document = read_resume_upload(multipart).await?;
    let resume_text = extract_resume_text(state.extractor.as_ref(), &document).await?;

    let (analysis_id, report) = run_analysis(&state, &resume_text)?;
    Ok(Json(AnalysisResponse::new(
        analysis_id,
        resume_text.chars().count(),
        report,
    )))
}

/// POST /api/v1/analyze/text
///
/// Same as `/analyze` for text the client already has. Empty text scores 0 everywhere.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let (analysis_id, report) = run_analysis(&state, &request.resume_text)?;
    Ok(Json(AnalysisResponse::new(
        analysis_id,
        request.resume_text.chars().count(),
        report,
    )))
}

/// POST /api/v1/report?format=pdf|text
///
/// Multipart upload with a `resume` file. Responds with the report as an attachment.
pub async fn handle_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let document = read_resume_upload(multipart).await?;
    let resume_text = extract_resume_text(state.extractor.as_ref(), &document).await?;
    let (_, report) = run_analysis(&state, &resume_text)?;

    let renderer = query.format.renderer();
    let content_type = renderer.content_type();
    let disposition = format!("attachment; filename=\"{}\"", renderer.file_name());

    let bytes = tokio::task::spawn_blocking(move || renderer.render(&report))
        .await
        .map_err(ReportError::from)??;

    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RoleListResponse> {
    Json(RoleListResponse {
        count: state.catalog.role_count(),
        roles: state.catalog.profiles().to_vec(),
    })
}

/// GET /api/v1/roles/*name
///
/// Wildcard route because role names may contain a slash ("UI/UX Designer").
pub async fn handle_get_role(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RoleProfile>, AppError> {
    state
        .catalog
        .get(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Role '{name}' not found")))
}
