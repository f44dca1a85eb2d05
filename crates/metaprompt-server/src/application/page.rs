//! Page State
//!
//! What the page currently shows: last input, output text and the status
//! of the generate action.

use tokio::sync::RwLock;

use metaprompt::{CompletionError, DomainError, GeneratedPrompt, GenerationStatus};

#[derive(Debug, Default, Clone)]
pub struct PageView {
    pub input: String,
    pub output: String,
    pub status: GenerationStatus,
    pub last_generation: Option<GeneratedPrompt>,
}

/// Shared page state
#[derive(Default)]
pub struct PageState {
    view: RwLock<PageView>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn view(&self) -> PageView {
        self.view.read().await.clone()
    }

    pub async fn output(&self) -> String {
        self.view.read().await.output.clone()
    }

    /// Mark a generation as started. Only one generation runs at a time.
    pub async fn begin_generation(&self, input: &str) -> Result<(), DomainError> {
        let mut view = self.view.write().await;
        if view.status.is_loading() {
            return Err(DomainError::Conflict(
                "a prompt is already being generated".to_string(),
            ));
        }
        view.input = input.to_string();
        view.status = GenerationStatus::Loading;
        Ok(())
    }

    /// Record the outcome. Failures leave the output untouched.
    pub async fn finish_generation(&self, result: &Result<GeneratedPrompt, CompletionError>) {
        let mut view = self.view.write().await;
        match result {
            Ok(generated) => {
                view.output = generated.display.clone();
                view.status = GenerationStatus::Ready;
                view.last_generation = Some(generated.clone());
            }
            Err(err) => {
                view.status = GenerationStatus::Failed(err.to_string());
            }
        }
    }

    /// Record a failure that did not come from the provider
    pub async fn fail_generation(&self, message: impl Into<String>) {
        self.view.write().await.status = GenerationStatus::Failed(message.into());
    }
}
