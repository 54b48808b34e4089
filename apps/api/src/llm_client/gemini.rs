//! Wire types for the Gemini `generateContent` endpoint.
//!
//! Only the fields this service sends or reads are modelled; unknown response
//! fields are ignored.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use super::{AssistantRequest, ContentPart};
use crate::models::chat::{ChatTurn, Role};

const USER_ROLE: &str = "user";
const MODEL_ROLE: &str = "model";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Exactly one field is set per part.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<Blob>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub mime_type: String,
    /// Base64-encoded bytes.
    pub data: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    pub prompt_token_count: Option<u32>,
    pub candidates_token_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Part {
            text: Some(text.into()),
            inline_data: None,
        }
    }
}

impl From<&ContentPart> for Part {
    fn from(part: &ContentPart) -> Self {
        match part {
            ContentPart::Text(text) => Part::text(text.clone()),
            ContentPart::Image(image) => Part {
                text: None,
                inline_data: Some(Blob {
                    mime_type: image.mime_type.clone(),
                    data: STANDARD.encode(&image.data),
                }),
            },
        }
    }
}

impl From<&ChatTurn> for Content {
    fn from(turn: &ChatTurn) -> Self {
        let role = match turn.role {
            Role::User => USER_ROLE,
            Role::Assistant => MODEL_ROLE,
        };
        Content {
            role: Some(role.to_string()),
            parts: vec![Part::text(turn.text.clone())],
        }
    }
}

impl From<&AssistantRequest> for GenerateContentRequest {
    fn from(request: &AssistantRequest) -> Self {
        let mut contents: Vec<Content> = request.history.iter().map(Content::from).collect();
        contents.push(Content {
            role: Some(USER_ROLE.to_string()),
            parts: request.content.iter().map(Part::from).collect(),
        });

        GenerateContentRequest {
            contents,
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part::text(request.instructions.clone())],
            }),
        }
    }
}

impl GenerateContentRequest {
    /// Recovers the prior turns carried by this request, i.e. every content
    /// entry except the trailing new user message.
    pub fn history_turns(&self) -> Vec<ChatTurn> {
        let Some((_, history)) = self.contents.split_last() else {
            return Vec::new();
        };
        history
            .iter()
            .filter_map(|content| {
                let role = match content.role.as_deref()? {
                    USER_ROLE => Role::User,
                    MODEL_ROLE => Role::Assistant,
                    _ => return None,
                };
                Some(ChatTurn {
                    role,
                    text: content.joined_text(),
                })
            })
            .collect()
    }
}

impl Content {
    fn joined_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(Content::joined_text)
    }
}
