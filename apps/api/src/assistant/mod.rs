// AI-assisted site features: chat, design inspector, message polish and
// stack advisor. Each feature builds an AssistantRequest, makes one call
// through llm_client, and degrades failures to a renderable fallback.

pub mod advisor;
pub mod chat;
pub mod handlers;
pub mod inspector;
pub mod interpreter;
pub mod lifecycle;
pub mod polish;
pub mod prompts;
pub mod sessions;
