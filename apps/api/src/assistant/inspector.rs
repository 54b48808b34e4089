//! Design inspector: reverse-engineers palette, layout and components from
//! an uploaded UI screenshot.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::assistant::interpreter::structured;
use crate::assistant::prompts::{
    INSPECTOR_COMPONENTS_FALLBACK, INSPECTOR_ERROR_LAYOUT, INSPECTOR_INSTRUCTIONS,
    INSPECTOR_LAYOUT_FALLBACK, INSPECTOR_USER_TEXT,
};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{
    AssistantClient, AssistantError, AssistantRequest, ContentPart, Feature, InlineImage,
};

/// Palette size the prompt asks for; extra colors are dropped.
pub const PALETTE_SIZE: usize = 5;

/// Always renderable: `layout` is never empty, `colors` may be.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignAnalysis {
    pub colors: Vec<String>,
    pub layout: String,
    pub components: String,
}

impl DesignAnalysis {
    fn failed() -> Self {
        Self {
            colors: Vec::new(),
            layout: INSPECTOR_ERROR_LAYOUT.to_string(),
            components: String::new(),
        }
    }
}

/// What the model is asked to emit. Fields may be missing, but present
/// fields must have the right types.
#[derive(Debug, Deserialize)]
struct RawAnalysis {
    #[serde(default)]
    colors: Option<Vec<String>>,
    #[serde(default)]
    layout: Option<String>,
    #[serde(default)]
    components: Option<String>,
}

/// Validates an uploaded file. Only `image/*` media types with content are
/// accepted.
pub fn image_from_upload(content_type: Option<&str>, data: Bytes) -> Result<InlineImage, AppError> {
    let mime_type = content_type
        .map(str::trim)
        .filter(|m| m.starts_with("image/"))
        .ok_or_else(|| AppError::Validation("upload must be an image".to_string()))?;
    if data.is_empty() {
        return Err(AppError::Validation("image is empty".to_string()));
    }
    Ok(InlineImage {
        mime_type: mime_type.to_string(),
        data,
    })
}

/// Parses a `data:image/<type>;base64,<payload>` URL as produced by a
/// browser `FileReader`.
pub fn image_from_data_url(url: &str) -> Result<InlineImage, AppError> {
    let invalid = || AppError::Validation("image must be a base64 data URL".to_string());

    let rest = url.trim().strip_prefix("data:").ok_or_else(invalid)?;
    let (header, payload) = rest.split_once(',').ok_or_else(invalid)?;
    let mime_type = header.strip_suffix(";base64").ok_or_else(invalid)?;
    let data = STANDARD.decode(payload.trim()).map_err(|_| invalid())?;

    image_from_upload(Some(mime_type), Bytes::from(data))
}

pub fn build_request(image: InlineImage) -> AssistantRequest {
    AssistantRequest {
        feature: Feature::DesignInspector,
        instructions: format!("{INSPECTOR_INSTRUCTIONS}\n\n{JSON_ONLY_INSTRUCTION}"),
        history: Vec::new(),
        content: vec![
            ContentPart::Image(image),
            ContentPart::Text(INSPECTOR_USER_TEXT.to_string()),
        ],
    }
}

/// Total over every outcome: never fails, never returns an empty layout.
pub fn interpret(result: Result<String, AssistantError>) -> DesignAnalysis {
    let raw = match result.and_then(|text| structured::<RawAnalysis>(&text)) {
        Ok(raw) => raw,
        Err(e) => {
            error!("Analysis failed: {e}");
            return DesignAnalysis::failed();
        }
    };

    let colors = raw
        .colors
        .unwrap_or_default()
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| is_hex_color(c))
        .take(PALETTE_SIZE)
        .collect();

    DesignAnalysis {
        colors,
        layout: non_blank_or(raw.layout, INSPECTOR_LAYOUT_FALLBACK),
        components: non_blank_or(raw.components, INSPECTOR_COMPONENTS_FALLBACK),
    }
}

pub async fn analyze(client: &dyn AssistantClient, image: InlineImage) -> DesignAnalysis {
    let request = build_request(image);
    interpret(client.generate(&request).await)
}

fn non_blank_or(value: Option<String>, fallback: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// `#rgb` or `#rrggbb`.
fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
