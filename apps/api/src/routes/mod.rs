pub mod health;
pub mod page;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(page::index_handler))
        .route("/health", get(health::health_handler))
        // Role catalog
        .route("/api/v1/roles", get(handlers::handle_list_roles))
        .route("/api/v1/roles/*name", get(handlers::handle_get_role))
        // Analysis
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/analyze/text", post(handlers::handle_analyze_text))
        .route("/api/v1/report", post(handlers::handle_report))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
