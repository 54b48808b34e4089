//! LLM Client: the single point of entry for all generative-model calls.
//!
//! ARCHITECTURAL RULE: No other module may call the model API directly.
//! Features build an `AssistantRequest` and hand it to an `AssistantClient`.
//!
//! Model: gemini-2.5-flash (hardcoded, not configurable)

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::chat::ChatTurn;

pub mod gemini;
pub mod prompts;

use gemini::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for every assistant feature.
pub const MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Failure kinds surfaced by the assistant path.
///
/// Transport, authentication and rate limiting are all `Unavailable`;
/// callers do not distinguish between them. An empty reply is not an error.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Assistant unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed assistant response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for AssistantError {
    fn from(e: reqwest::Error) -> Self {
        AssistantError::Unavailable(e.to_string())
    }
}

/// Which site feature a request belongs to. Used for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Chat,
    DesignInspector,
    MessagePolish,
    StackAdvisor,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Feature::Chat => "chat",
            Feature::DesignInspector => "design_inspector",
            Feature::MessagePolish => "message_polish",
            Feature::StackAdvisor => "stack_advisor",
        };
        f.write_str(name)
    }
}

/// An uploaded image, carried as raw bytes until it is put on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: Bytes,
}

/// One piece of the end user's contribution to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    Text(String),
    Image(InlineImage),
}

/// A self-contained, provider-neutral request ready to transmit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantRequest {
    pub feature: Feature,
    /// Fixed instructions for the feature, sent as the system instruction.
    pub instructions: String,
    /// Prior turns, oldest first. Empty for single-shot features.
    pub history: Vec<ChatTurn>,
    pub content: Vec<ContentPart>,
}

/// The seam between features and the model provider.
///
/// Implementations hold no per-conversation state: callers carry history
/// forward by re-including it in the next request.
#[async_trait]
pub trait AssistantClient: Send + Sync {
    /// Makes exactly one call and returns the raw text the model produced.
    async fn generate(&self, request: &AssistantRequest) -> Result<String, AssistantError>;
}

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: Option<String>,
}

/// Gemini `generateContent` client. One outbound call per `generate`, no retry.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AssistantError> {
        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key: config.api_key,
            base_url,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, MODEL)
    }
}

#[async_trait]
impl AssistantClient for GeminiClient {
    async fn generate(&self, request: &AssistantRequest) -> Result<String, AssistantError> {
        let body = GenerateContentRequest::from(request);
        debug!(
            feature = %request.feature,
            "Sending assistant request with {} prior turns",
            body.history_turns().len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!(feature = %request.feature, "Gemini API returned {status}: {message}");
            return Err(AssistantError::Unavailable(format!(
                "status {}: {message}",
                status.as_u16()
            )));
        }

        let envelope: GenerateContentResponse = response.json().await?;

        if let Some(usage) = &envelope.usage_metadata {
            debug!(
                feature = %request.feature,
                "Assistant call succeeded: prompt_tokens={:?}, output_tokens={:?}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        // Empty text is left to each feature's fallback.
        let text = envelope.text().unwrap_or_default();
        if text.trim().is_empty() {
            warn!(feature = %request.feature, "Gemini returned no text");
        }
        Ok(text)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_uses_hardcoded_model_and_trims_slash() {
        let client = GeminiClient::new(GeminiConfig {
            api_key: "k".to_string(),
            base_url: Some("http://localhost:9999/v1beta/".to_string()),
        })
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_default_base_url() {
        let client = GeminiClient::new(GeminiConfig {
            api_key: "k".to_string(),
            base_url: None,
        })
        .unwrap();
        assert!(client.endpoint().starts_with(DEFAULT_BASE_URL));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_unavailable() {
        let client = GeminiClient::new(GeminiConfig {
            api_key: "k".to_string(),
            base_url: Some("http://127.0.0.1:1".to_string()),
        })
        .unwrap();
        let request = AssistantRequest {
            feature: Feature::MessagePolish,
            instructions: "rewrite".to_string(),
            history: vec![],
            content: vec![ContentPart::Text("hi".to_string())],
        };
        let err = client.generate(&request).await.unwrap_err();
        assert!(matches!(err, AssistantError::Unavailable(_)));
    }

    /// Serves every request with `status` and `body` on an ephemeral port.
    async fn stub_gemini(status: axum::http::StatusCode, body: serde_json::Value) -> GeminiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = axum::Router::new().fallback(move || async move { (status, axum::Json(body)) });
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        GeminiClient::new(GeminiConfig {
            api_key: "k".to_string(),
            base_url: Some(format!("http://{addr}/v1beta")),
        })
        .unwrap()
    }

    fn chat_request() -> AssistantRequest {
        AssistantRequest {
            feature: Feature::Chat,
            instructions: "be brief".to_string(),
            history: vec![],
            content: vec![ContentPart::Text("hello".to_string())],
        }
    }

    #[tokio::test]
    async fn test_reply_without_text_reaches_chat_empty_fallback() {
        let client = stub_gemini(
            axum::http::StatusCode::OK,
            serde_json::json!({"candidates": []}),
        )
        .await;

        let result = client.generate(&chat_request()).await;

        assert_eq!(result.as_deref().ok(), Some(""));
        assert_eq!(
            crate::assistant::chat::interpret(result).text,
            crate::assistant::prompts::CHAT_EMPTY_FALLBACK
        );
    }

    #[tokio::test]
    async fn test_rate_limited_is_unavailable() {
        let client = stub_gemini(
            axum::http::StatusCode::TOO_MANY_REQUESTS,
            serde_json::json!({"error": {"code": 429, "message": "Resource exhausted"}}),
        )
        .await;

        let err = client.generate(&chat_request()).await.unwrap_err();

        match err {
            AssistantError::Unavailable(message) => {
                assert!(message.contains("429"), "{message}");
                assert!(message.contains("Resource exhausted"), "{message}");
            }
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }
}
