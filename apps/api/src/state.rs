use std::sync::Arc;

use crate::assistant::sessions::SessionStore;
use crate::config::Config;
use crate::llm_client::AssistantClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model client. Default: GeminiClient. Tests inject a scripted fake.
    pub assistant: Arc<dyn AssistantClient>,
    /// Open chat widgets, in memory only.
    pub sessions: SessionStore,
    pub config: Config,
}

impl AppState {
    pub fn new(assistant: Arc<dyn AssistantClient>, config: Config) -> Self {
        Self {
            assistant,
            sessions: SessionStore::new(config.chat_session_ttl),
            config,
        }
    }
}
