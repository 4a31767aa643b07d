use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::providers::JobProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Ordered provider strategy list: first non-empty result wins.
    /// The synthetic provider sits last so the chain never comes up empty.
    pub providers: Arc<Vec<Arc<dyn JobProvider>>>,
    pub config: Config,
}
