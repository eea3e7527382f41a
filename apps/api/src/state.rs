use std::sync::Arc;

use crate::analysis::ai::AiAnalyzer;

/// Shared application state injected into all route handlers via Axum
/// extractors. The analyzer owns the whole dual-path stack (LLM client,
/// heuristic analyzer, lexicon) and is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<AiAnalyzer>,
}
