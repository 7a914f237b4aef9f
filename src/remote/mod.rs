//! @acp:module "Remote Generation"
//! @acp:summary "Adapter for AI-generated briefs via a chat completion endpoint"
//! @acp:domain cli
//! @acp:layer service
//!
//! One request per generation attempt, never retried. Any failure is handed
//! back to the caller, which falls back to the deterministic composer.

pub mod client;
pub mod prompt;

pub use client::{ChatMessage, ChatRequest, CompletionBackend, OpenAiClient};
pub use prompt::{user_prompt, SYSTEM_PROMPT};

use crate::error::RemoteError;
use crate::requirements::UserRequirements;

/// @acp:summary "Ask the backend for a brief built from the requirements"
pub fn generate_remote(
    backend: &dyn CompletionBackend,
    requirements: &UserRequirements,
) -> Result<String, RemoteError> {
    backend.complete(SYSTEM_PROMPT, &user_prompt(requirements))
}
