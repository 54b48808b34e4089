//! Portfolio chat assistant.
//!
//! The model keeps no state between calls: every request carries the whole
//! log so far as history, followed by the new utterance.

use tokio::time::Instant;
use tracing::{error, warn};

use crate::assistant::interpreter::free_text;
use crate::assistant::lifecycle::{RequestLifecycle, RequestState};
use crate::assistant::prompts::{
    CHAT_EMPTY_FALLBACK, CHAT_ERROR_FALLBACK, CHAT_GREETING, CHAT_PERSONA, CHAT_TONE,
};
use crate::errors::AppError;
use crate::llm_client::{AssistantClient, AssistantError, AssistantRequest, ContentPart, Feature};
use crate::models::chat::ChatTurn;
use crate::profile::context::portfolio_context;

/// System instruction for the chat feature: persona, site content, tone.
pub fn instructions() -> String {
    format!("{CHAT_PERSONA}\n\n{}\n{CHAT_TONE}", portfolio_context())
}

/// Builds the request for one user utterance. `history` is copied, never
/// modified.
pub fn build_request(history: &[ChatTurn], message: &str) -> AssistantRequest {
    AssistantRequest {
        feature: Feature::Chat,
        instructions: instructions(),
        history: history.to_vec(),
        content: vec![ContentPart::Text(message.trim().to_string())],
    }
}

/// Maps the call outcome to the assistant turn shown to the visitor.
pub fn interpret(result: Result<String, AssistantError>) -> ChatTurn {
    match result {
        Ok(raw) => match free_text(&raw) {
            Some(text) => ChatTurn::assistant(text),
            None => {
                warn!("Chat reply was empty; using fallback");
                ChatTurn::assistant(CHAT_EMPTY_FALLBACK)
            }
        },
        Err(e) => {
            error!("Chat error: {e}");
            ChatTurn::assistant(CHAT_ERROR_FALLBACK)
        }
    }
}

/// Rejects blank input before any outbound call is made.
pub fn validate_message(message: &str) -> Result<(), AppError> {
    if message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }
    Ok(())
}

/// One stateless exchange: validates, calls once, degrades failures.
pub async fn reply(
    client: &dyn AssistantClient,
    history: &[ChatTurn],
    message: &str,
) -> Result<ChatTurn, AppError> {
    validate_message(message)?;
    let request = build_request(history, message);
    Ok(interpret(client.generate(&request).await))
}

/// `http://` and `https://` URLs in a reply, in order of appearance, so the
/// front end can render them as links.
pub fn extract_links(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|word| word.starts_with("http://") || word.starts_with("https://"))
        .map(|word| {
            word.trim_end_matches(|c: char| matches!(c, '.' | ',' | ')' | ';' | ':' | '!' | '?'))
                .to_string()
        })
        .collect()
}

/// Append-only conversation log. Always starts with the greeting.
#[derive(Debug, Clone)]
pub struct ChatLog {
    turns: Vec<ChatTurn>,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    pub fn new() -> Self {
        Self {
            turns: vec![ChatTurn::assistant(CHAT_GREETING)],
        }
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }
}

/// A chat widget instance: its log plus the lifecycle of its one
/// outstanding call.
#[derive(Debug)]
pub struct ChatSession {
    log: ChatLog,
    lifecycle: RequestLifecycle,
    last_active: Instant,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            log: ChatLog::new(),
            lifecycle: RequestLifecycle::default(),
            last_active: Instant::now(),
        }
    }

    pub fn turns(&self) -> &[ChatTurn] {
        self.log.turns()
    }

    pub fn state(&self) -> RequestState {
        self.lifecycle.state()
    }

    pub fn is_pending(&self) -> bool {
        self.lifecycle.is_pending()
    }

    pub fn last_active(&self) -> Instant {
        self.last_active
    }

    /// First half of a submission: validates, marks the session pending,
    /// appends the user turn and returns the request to send. The history in
    /// the request is the log as it stood before the user turn.
    pub fn begin_submit(&mut self, message: &str) -> Result<AssistantRequest, AppError> {
        validate_message(message)?;
        self.lifecycle.begin()?;

        let request = build_request(self.log.turns(), message);
        self.log.push(ChatTurn::user(message.trim()));
        self.last_active = Instant::now();
        Ok(request)
    }

    /// Second half: appends the assistant turn (reply or fallback) and
    /// settles the lifecycle.
    pub fn complete(&mut self, result: Result<String, AssistantError>) -> ChatTurn {
        self.lifecycle.finish(result.is_ok());
        let turn = interpret(result);
        self.log.push(turn.clone());
        self.last_active = Instant::now();
        turn
    }

    /// Both halves around a single call, for a session owned outright.
    /// `SessionStore` splits them around a spawned call instead.
    #[cfg(test)]
    pub async fn submit(
        &mut self,
        client: &dyn AssistantClient,
        message: &str,
    ) -> Result<ChatTurn, AppError> {
        let request = self.begin_submit(message)?;
        let result = client.generate(&request).await;
        Ok(self.complete(result))
    }
}
