//! Page DTOs - What the page script sends and reads back

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use utoipa::ToSchema;
use uuid::Uuid;

use metaprompt::{GeneratedPrompt, GenerationStatus, Notice};

use crate::application::PageView;

/// Generate request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Task description or existing prompt; sent to the model as-is
    #[serde(default)]
    pub task: String,
}

/// Copy request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CopyRequest {
    /// Text to copy; defaults to the current output
    #[serde(default)]
    pub text: Option<String>,
}

/// Generation status
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusView {
    /// idle, loading, ready or failed
    pub state: String,
    pub message: Option<String>,
}

impl From<&GenerationStatus> for StatusView {
    fn from(status: &GenerationStatus) -> Self {
        let (state, message) = match status {
            GenerationStatus::Idle => ("idle", None),
            GenerationStatus::Loading => ("loading", None),
            GenerationStatus::Ready => ("ready", None),
            GenerationStatus::Failed(message) => ("failed", Some(message.clone())),
        };
        Self {
            state: state.to_string(),
            message,
        }
    }
}

/// Copy notice
#[derive(Debug, Serialize, ToSchema)]
pub struct NoticeView {
    pub message: String,
    pub visible: bool,
    pub is_error: bool,
}

impl From<Notice> for NoticeView {
    fn from(notice: Notice) -> Self {
        Self {
            message: notice.message,
            visible: notice.visible,
            is_error: notice.is_error,
        }
    }
}

/// Details of the last successful generation
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerationInfo {
    pub id: Uuid,
    pub model: String,
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl From<&GeneratedPrompt> for GenerationInfo {
    fn from(generated: &GeneratedPrompt) -> Self {
        Self {
            id: generated.id,
            model: generated.model.clone(),
            prompt_tokens: generated.prompt_tokens,
            completion_tokens: generated.completion_tokens,
            created_at: generated.created_at,
        }
    }
}

/// Everything the page renders
#[derive(Debug, Serialize, ToSchema)]
pub struct PageSnapshot {
    pub input: String,
    pub output: String,
    pub status: StatusView,
    pub notice: NoticeView,
    pub last_generation: Option<GenerationInfo>,
    /// How long a notice stays visible
    pub notice_delay_ms: u64,
}

impl PageSnapshot {
    pub fn new(view: PageView, notice: Notice, notice_delay: Duration) -> Self {
        Self {
            status: StatusView::from(&view.status),
            last_generation: view.last_generation.as_ref().map(GenerationInfo::from),
            input: view.input,
            output: view.output,
            notice: notice.into(),
            notice_delay_ms: notice_delay.as_millis() as u64,
        }
    }
}
