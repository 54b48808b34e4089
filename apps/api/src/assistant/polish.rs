//! Contact-message polisher. On any failure the visitor's draft comes back
//! untouched.

use serde::Serialize;
use tracing::{error, warn};

use crate::assistant::interpreter::free_text;
use crate::assistant::prompts::{POLISH_FAILURE_STATUS, POLISH_INSTRUCTIONS, POLISH_SUCCESS_STATUS};
use crate::errors::AppError;
use crate::llm_client::prompts::PLAIN_TEXT_INSTRUCTION;
use crate::llm_client::{AssistantClient, AssistantError, AssistantRequest, ContentPart, Feature};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolishOutcome {
    /// The rewritten message, or the original draft if polishing failed.
    pub message: String,
    pub polished: bool,
    pub status: &'static str,
}

pub fn build_request(draft: &str) -> AssistantRequest {
    AssistantRequest {
        feature: Feature::MessagePolish,
        instructions: format!("{POLISH_INSTRUCTIONS}\n\n{PLAIN_TEXT_INSTRUCTION}"),
        history: Vec::new(),
        content: vec![ContentPart::Text(format!("Original Message: \"{draft}\""))],
    }
}

pub fn interpret(draft: &str, result: Result<String, AssistantError>) -> PolishOutcome {
    let unchanged = || PolishOutcome {
        message: draft.to_string(),
        polished: false,
        status: POLISH_FAILURE_STATUS,
    };

    match result {
        Ok(raw) => match free_text(&raw) {
            Some(text) => PolishOutcome {
                message: text,
                polished: true,
                status: POLISH_SUCCESS_STATUS,
            },
            None => {
                warn!("Polish returned empty text; keeping draft");
                unchanged()
            }
        },
        Err(e) => {
            error!("Error polishing message: {e}");
            unchanged()
        }
    }
}

pub async fn polish(client: &dyn AssistantClient, draft: &str) -> Result<PolishOutcome, AppError> {
    if draft.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }
    let request = build_request(draft);
    Ok(interpret(draft, client.generate(&request).await))
}
