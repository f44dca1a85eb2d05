//! Completion Provider Port
//!
//! Abstract interface for chat-completion calls. The server ships an
//! OpenAI-compatible implementation; tests use in-memory stubs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::ChatMessage;
use crate::domain::errors::CompletionError;

/// Options for a completion call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Temperature (0.0 - 2.0)
    pub temperature: Option<f32>,
}

/// Response from a completion call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Text of the first choice
    pub content: String,
    /// Model that generated the response
    pub model: String,
    /// Token usage statistics, when reported
    pub usage: Option<TokenUsage>,
    /// Finish reason of the first choice
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

/// Chat-completion provider
///
/// # Example
///
/// ```rust,ignore
/// use metaprompt::{compose, CompletionOptions, CompletionProvider};
///
/// let request = compose("Write release notes from a changelog.");
/// let response = provider
///     .complete(&request.messages(), &CompletionOptions::default())
///     .await?;
/// println!("{}", response.content);
/// ```
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion from messages
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, CompletionError>;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
