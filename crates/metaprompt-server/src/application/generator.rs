//! Prompt Generator Service (Use Case)
//!
//! Composes the meta-prompt request for a task, calls the completion
//! provider and decorates the first choice for display.

use std::sync::Arc;

use metaprompt::{
    compose, CompletionError, CompletionOptions, CompletionProvider, GeneratedPrompt,
};

/// Application service for generating system prompts
pub struct PromptGenerator<P: CompletionProvider + ?Sized> {
    provider: Arc<P>,
    options: CompletionOptions,
}

impl<P: CompletionProvider + ?Sized> PromptGenerator<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            options: CompletionOptions::default(),
        }
    }

    /// Use `options` for every completion call
    pub fn with_options(mut self, options: CompletionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn model_id(&self) -> &str {
        self.provider.model_id()
    }

    /// Generate a system prompt for a task description or existing prompt
    pub async fn generate(&self, task_or_prompt: &str) -> Result<GeneratedPrompt, CompletionError> {
        let request = compose(task_or_prompt);

        tracing::debug!(
            "Requesting completion from {} ({} input chars)",
            self.provider.model_id(),
            task_or_prompt.chars().count()
        );

        let response = self
            .provider
            .complete(&request.messages(), &self.options)
            .await?;

        let mut generated = GeneratedPrompt::new(response.content, response.model);
        if let Some(usage) = response.usage {
            generated = generated.with_usage(usage.prompt_tokens, usage.completion_tokens);
        }

        tracing::info!(
            "Generated prompt {} with {} ({} chars)",
            generated.id,
            generated.model,
            generated.content.chars().count()
        );

        Ok(generated)
    }
}
