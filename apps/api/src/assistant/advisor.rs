//! Tech-stack advisor. Recommends a stack for a described app idea.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::assistant::interpreter::structured;
use crate::assistant::prompts::{ADVISOR_ERROR_REASONING, ADVISOR_INSTRUCTIONS};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{AssistantClient, AssistantError, AssistantRequest, ContentPart, Feature};

const MAX_REASONING_SENTENCES: usize = 3;

/// Every field is required in the model's reply; a partial object is treated
/// as malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackRecommendation {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub database: Vec<String>,
    pub ai_features: Vec<String>,
    pub reasoning: String,
}

impl StackRecommendation {
    fn failed() -> Self {
        Self {
            frontend: Vec::new(),
            backend: Vec::new(),
            database: Vec::new(),
            ai_features: Vec::new(),
            reasoning: ADVISOR_ERROR_REASONING.to_string(),
        }
    }
}

pub fn build_request(idea: &str) -> AssistantRequest {
    AssistantRequest {
        feature: Feature::StackAdvisor,
        instructions: format!("{ADVISOR_INSTRUCTIONS}\n\n{JSON_ONLY_INSTRUCTION}"),
        history: Vec::new(),
        content: vec![ContentPart::Text(format!(
            "The user has this project idea: \"{}\"",
            idea.trim()
        ))],
    }
}

pub fn interpret(result: Result<String, AssistantError>) -> StackRecommendation {
    match result.and_then(|text| structured::<StackRecommendation>(&text)) {
        Ok(mut recommendation) => {
            recommendation.reasoning =
                limit_sentences(recommendation.reasoning.trim(), MAX_REASONING_SENTENCES);
            recommendation
        }
        Err(e) => {
            error!("Error generating stack: {e}");
            StackRecommendation::failed()
        }
    }
}

pub async fn advise(
    client: &dyn AssistantClient,
    idea: &str,
) -> Result<StackRecommendation, AppError> {
    if idea.trim().is_empty() {
        return Err(AppError::Validation("idea cannot be empty".to_string()));
    }
    let request = build_request(idea);
    Ok(interpret(client.generate(&request).await))
}

/// Keeps the first `max` sentences, ending at `.`, `!` or `?` followed by
/// whitespace or end of text.
fn limit_sentences(text: &str, max: usize) -> String {
    let mut seen = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
            if at_boundary {
                seen += 1;
                if seen == max {
                    return text[..i + c.len_utf8()].to_string();
                }
            }
        }
    }
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::FakeAssistant;

    #[tokio::test]
    async fn test_mocked_reply_is_parsed_exactly() {
        let fake = FakeAssistant::replying(&[
            r#"{"frontend":["A"],"backend":["B"],"database":["C"],"ai_features":["D"],"reasoning":"E"}"#,
        ]);
        let recommendation = advise(&fake, "meal prep marketplace").await.unwrap();
        assert_eq!(
            recommendation,
            StackRecommendation {
                frontend: vec!["A".into()],
                backend: vec!["B".into()],
                database: vec!["C".into()],
                ai_features: vec!["D".into()],
                reasoning: "E".into(),
            }
        );
    }

    #[test]
    fn test_fenced_reply_is_accepted() {
        let raw = "```json\n{\"frontend\":[\"Next.js\"],\"backend\":[\"Axum\"],\
                   \"database\":[\"Postgres\"],\"ai_features\":[],\"reasoning\":\"Fast.\"}\n```";
        let recommendation = interpret(Ok(raw.to_string()));
        assert_eq!(recommendation.backend, vec!["Axum"]);
        assert!(recommendation.ai_features.is_empty());
    }

    #[test]
    fn test_partial_object_falls_back_to_default() {
        let recommendation = interpret(Ok(r#"{"frontend":["A"]}"#.to_string()));
        assert_eq!(recommendation, StackRecommendation::failed());
    }

    #[test]
    fn test_failure_falls_back_to_default() {
        let recommendation = interpret(Err(AssistantError::Unavailable("429".into())));
        assert!(recommendation.frontend.is_empty());
        assert_eq!(recommendation.reasoning, ADVISOR_ERROR_REASONING);
    }

    #[test]
    fn test_reasoning_is_capped_at_three_sentences() {
        let text = "One. Two! Three? Four. Five.";
        assert_eq!(limit_sentences(text, 3), "One. Two! Three?");
        assert_eq!(limit_sentences("Uses v1.2 of it. Done", 3), "Uses v1.2 of it. Done");
    }

    #[tokio::test]
    async fn test_blank_idea_makes_no_call() {
        let fake = FakeAssistant::replying(&["unused"]);
        assert!(matches!(
            advise(&fake, "\n").await,
            Err(AppError::Validation(_))
        ));
        assert_eq!(fake.calls(), 0);
    }
}
