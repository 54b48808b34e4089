//! Axum route handlers for the contact form.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assistant::polish::{polish, PolishOutcome};
use crate::contact::form::{validate_form, ContactForm};
use crate::errors::AppError;
use crate::state::AppState;

const CONTACT_THANK_YOU: &str = "Thank you for your message!";

#[derive(Debug, Deserialize)]
pub struct PolishRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: &'static str,
}

/// POST /api/v1/contact/polish
///
/// Always 200 for a non-blank draft; `polished: false` means the draft came
/// back unchanged.
pub async fn handle_polish(
    State(state): State<AppState>,
    Json(request): Json<PolishRequest>,
) -> Result<Json<PolishOutcome>, AppError> {
    Ok(Json(polish(state.assistant.as_ref(), &request.message).await?))
}

/// POST /api/v1/contact
///
/// There is no delivery backend; accepted submissions are logged.
pub async fn handle_submit(Json(form): Json<ContactForm>) -> Result<Json<ContactResponse>, AppError> {
    let errors = validate_form(&form);
    if !errors.is_empty() {
        let fields: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(AppError::Validation(fields.join(", ")));
    }

    info!(
        name = %form.name.trim(),
        email = %form.email.trim(),
        "Contact form submitted ({} chars)",
        form.message.trim().chars().count()
    );

    Ok(Json(ContactResponse {
        status: CONTACT_THANK_YOU,
    }))
}
