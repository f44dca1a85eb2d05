//! Domain Errors
//!
//! Error types for completion calls, clipboard access and page operations.

use std::time::Duration;
use thiserror::Error;

/// Failure of a chat-completion call
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompletionError {
    #[error("Could not reach completion service: {0}")]
    Network(String),

    #[error("Completion service did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Completion service rejected the credentials ({status}): {body}")]
    Unauthorized { status: u16, body: String },

    #[error("Completion service error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),

    #[error("Completion response contained no message text")]
    EmptyResponse,
}

/// Failure to write to the host clipboard
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("No clipboard command available on this host")]
    Unavailable,

    #[error("Clipboard command `{command}` failed: {reason}")]
    Command { command: String, reason: String },
}

/// Domain layer errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_error_wraps_transparently() {
        let err: DomainError = CompletionError::Network("connection refused".into()).into();
        assert_eq!(
            err.to_string(),
            "Could not reach completion service: connection refused"
        );
    }

    #[test]
    fn test_clipboard_error_message() {
        let err = ClipboardError::Command {
            command: "xclip".into(),
            reason: "exit status 1".into(),
        };
        assert_eq!(err.to_string(), "Clipboard command `xclip` failed: exit status 1");
    }
}
