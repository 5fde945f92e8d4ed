use crate::llm_client::GroqClient;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: GroqClient,
    pub sessions: SessionStore,
}
