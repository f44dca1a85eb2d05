//! Prompt - Composed requests and generated system prompts
//!
//! Pure domain entities without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ChatMessage;

/// A composed chat-completion request: the meta-prompt as the system
/// message, followed by the labelled task as the user message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    system: ChatMessage,
    user: ChatMessage,
}

impl PromptRequest {
    pub(crate) fn new(system: ChatMessage, user: ChatMessage) -> Self {
        Self { system, user }
    }

    /// The fixed instruction entry
    pub fn system(&self) -> &ChatMessage {
        &self.system
    }

    /// The labelled task entry
    pub fn user(&self) -> &ChatMessage {
        &self.user
    }

    /// Messages in request order
    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![self.system.clone(), self.user.clone()]
    }
}

/// GeneratedPrompt - The result of one successful generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPrompt {
    pub id: Uuid,
    /// Text of the first completion choice, as returned
    pub content: String,
    /// Text shown to the user (display prefix + content)
    pub display: String,
    /// Model that produced the completion
    pub model: String,
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl GeneratedPrompt {
    /// Create a new generated prompt from the raw completion text
    pub fn new(content: String, model: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            display: crate::domain::services::decorate(&content),
            content,
            model,
            prompt_tokens: None,
            completion_tokens: None,
            created_at: Utc::now(),
        }
    }

    /// Attach token usage reported by the provider
    pub fn with_usage(mut self, prompt_tokens: u32, completion_tokens: u32) -> Self {
        self.prompt_tokens = Some(prompt_tokens);
        self.completion_tokens = Some(completion_tokens);
        self
    }
}
