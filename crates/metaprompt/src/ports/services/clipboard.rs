//! Clipboard Service Port
//!
//! Abstract interface for writing text to the host clipboard.

use async_trait::async_trait;

use crate::domain::errors::ClipboardError;

/// Service interface for the host clipboard
#[async_trait]
pub trait ClipboardService: Send + Sync {
    /// Replace the clipboard contents with `text`
    async fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}
