//! Axum route handlers for the assistant features.
//!
//! Assistant failures never surface as errors here: each feature has already
//! degraded them to a renderable fallback. Handlers only reject bad input.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assistant::advisor::{advise, StackRecommendation};
use crate::assistant::chat::{extract_links, reply};
use crate::assistant::inspector::{analyze, image_from_data_url, image_from_upload, DesignAnalysis};
use crate::assistant::lifecycle::RequestState;
use crate::assistant::sessions::SessionSnapshot;
use crate::errors::AppError;
use crate::models::chat::ChatTurn;
use crate::state::AppState;

/// Multipart field carrying the screenshot.
const IMAGE_FIELD: &str = "image";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Turns so far, oldest first, as the client holds them.
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: ChatTurn,
    pub links: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SessionMessageRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SessionMessageResponse {
    pub reply: ChatTurn,
    pub links: Vec<String>,
    pub state: RequestState,
}

#[derive(Debug, Deserialize)]
pub struct DataUrlInspectRequest {
    /// `data:image/<type>;base64,...`
    pub image: String,
}

#[derive(Debug, Deserialize)]
pub struct AdviseRequest {
    pub idea: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/chat
///
/// Stateless exchange: the client sends its history with every message.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let reply = reply(state.assistant.as_ref(), &request.history, &request.message).await?;
    let links = extract_links(&reply.text);
    Ok(Json(ChatResponse { reply, links }))
}

/// POST /api/v1/chat/sessions
pub async fn handle_create_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.sessions.create().await)
}

/// GET /api/v1/chat/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(state.sessions.snapshot(session_id).await?))
}

/// POST /api/v1/chat/sessions/:id/messages
///
/// 409 while the session's previous message is still awaiting a reply.
pub async fn handle_session_message(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SessionMessageRequest>,
) -> Result<Json<SessionMessageResponse>, AppError> {
    let submission = state
        .sessions
        .submit(Arc::clone(&state.assistant), session_id, &request.message)
        .await?;
    let links = extract_links(&submission.reply.text);
    Ok(Json(SessionMessageResponse {
        reply: submission.reply,
        links,
        state: submission.state,
    }))
}

/// POST /api/v1/inspect
///
/// Multipart upload with the screenshot in the `image` field.
pub async fn handle_inspect(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DesignAnalysis>, AppError> {
    let mut image = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("could not read image: {e}")))?;
        image = Some(image_from_upload(content_type.as_deref(), data)?);
        break;
    }

    let image = image
        .ok_or_else(|| AppError::Validation(format!("missing '{IMAGE_FIELD}' field")))?;
    Ok(Json(analyze(state.assistant.as_ref(), image).await))
}

/// POST /api/v1/inspect/data-url
pub async fn handle_inspect_data_url(
    State(state): State<AppState>,
    Json(request): Json<DataUrlInspectRequest>,
) -> Result<Json<DesignAnalysis>, AppError> {
    let image = image_from_data_url(&request.image)?;
    Ok(Json(analyze(state.assistant.as_ref(), image).await))
}

/// POST /api/v1/advise
pub async fn handle_advise(
    State(state): State<AppState>,
    Json(request): Json<AdviseRequest>,
) -> Result<Json<StackRecommendation>, AppError> {
    Ok(Json(advise(state.assistant.as_ref(), &request.idea).await?))
}
