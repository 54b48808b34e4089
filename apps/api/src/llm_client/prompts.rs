// Shared prompt fragments used by more than one assistant feature.
// Each feature keeps its own instructions in assistant::prompts.

/// Appended to every feature that expects a structured reply.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to features whose reply is shown to the visitor verbatim.
pub const PLAIN_TEXT_INSTRUCTION: &str = "Return ONLY the requested text. \
    Do NOT add a preamble, quotation marks, or commentary.";
