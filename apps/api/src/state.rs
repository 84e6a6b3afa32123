use std::sync::Arc;

use crate::generation::validator::LineValidator;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is immutable after startup; requests share it by reference.
#[derive(Clone)]
pub struct AppState {
    /// Text generation backend. Default: the Gemini `LlmClient`.
    pub generator: Arc<dyn TextGenerator>,
    /// Post-generation hook. Default: `PassThroughValidator`.
    pub validator: Arc<dyn LineValidator>,
}
