//! In-memory stand-ins for the completion provider and clipboard

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use metaprompt::{
    ChatMessage, ClipboardError, ClipboardService, CompletionError, CompletionOptions,
    CompletionProvider, CompletionResponse,
};

/// Provider answering from a queue of canned results
#[derive(Default)]
pub struct StubProvider {
    answers: Mutex<VecDeque<Result<CompletionResponse, CompletionError>>>,
    pub calls: Mutex<Vec<Vec<ChatMessage>>>,
    pub options: Mutex<Vec<CompletionOptions>>,
    /// When set, each call waits for a notification before answering
    pub gate: Option<Arc<Notify>>,
}

impl StubProvider {
    pub fn answering(answers: Vec<Result<CompletionResponse, CompletionError>>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            ..Self::default()
        }
    }

    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }
}

pub fn reply(content: &str) -> Result<CompletionResponse, CompletionError> {
    Ok(CompletionResponse {
        content: content.to_string(),
        model: "stub-model".to_string(),
        usage: None,
        finish_reason: Some("stop".to_string()),
    })
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, CompletionError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        self.options.lock().unwrap().push(options.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(CompletionError::EmptyResponse))
    }

    fn model_id(&self) -> &str {
        "stub-model"
    }
}

/// Clipboard that records what it was given
#[derive(Default)]
pub struct StubClipboard {
    pub copies: Mutex<Vec<String>>,
    pub fail_with: Option<ClipboardError>,
}

impl StubClipboard {
    pub fn failing(err: ClipboardError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::default()
        }
    }

    pub fn last(&self) -> Option<String> {
        self.copies.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ClipboardService for StubClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.copies.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
