//! Turns raw model text into the shape a feature expects.
//!
//! Nothing here escalates: features call these helpers and fall back to
//! their own defaults when they return `None` or `Err`.

use serde::de::DeserializeOwned;

use crate::llm_client::AssistantError;

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Language tag, if any: "json", "JSON", "jsonc".
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    let rest = rest.trim_start();
    rest.strip_suffix("```").map(str::trim).unwrap_or(rest)
}

/// Trimmed text, or `None` when the model produced only whitespace.
pub fn free_text(raw: &str) -> Option<String> {
    let text = raw.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Parses fenced or bare JSON into `T`. Any mismatch with `T`'s schema is
/// a `MalformedResponse`.
pub fn structured<T: DeserializeOwned>(raw: &str) -> Result<T, AssistantError> {
    let text = strip_code_fences(raw);
    serde_json::from_str(text).map_err(|e| AssistantError::MalformedResponse(e.to_string()))
}
