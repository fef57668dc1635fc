use std::sync::Arc;

use crate::llm_client::ModelGateway;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Provider gateway. `LlmClient` in production, a fake in router tests.
    pub gateway: Arc<dyn ModelGateway>,
}
