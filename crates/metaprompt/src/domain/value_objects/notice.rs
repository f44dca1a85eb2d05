//! Notice - Transient message under the copy button

use serde::{Deserialize, Serialize};

/// Confirmation shown after a successful copy
pub const COPIED_NOTICE: &str = "✔ 已复制到剪贴板！";

/// Notice state. Hiding keeps the last message.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub visible: bool,
    /// Set when the notice reports a failure rather than a confirmation
    #[serde(default)]
    pub is_error: bool,
}

impl Notice {
    pub fn copied() -> Self {
        Self {
            message: COPIED_NOTICE.to_string(),
            visible: true,
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            visible: true,
            is_error: true,
        }
    }

    /// Same notice, hidden
    pub fn hidden(self) -> Self {
        Self {
            visible: false,
            ..self
        }
    }
}
