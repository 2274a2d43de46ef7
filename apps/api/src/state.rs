use std::sync::Arc;

use crate::catalog::RoleCatalog;
use crate::config::Config;
use crate::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at start-up and never mutated.
    pub catalog: Arc<RoleCatalog>,
    /// Pluggable text extractor. Default: DocumentTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
