//! Metaprompt Routes
//!
//! - / - The generator page
//! - /api/state - Current page snapshot
//! - /api/generate - Generate a system prompt
//! - /api/copy - Copy output to the host clipboard

pub mod clipboard;
pub mod generate;
pub mod page;
pub mod swagger;

use axum::http::StatusCode;
use metaprompt::{CompletionError, DomainError};

/// Map a domain error to an HTTP status and message
pub(crate) fn error_response(err: DomainError) -> (StatusCode, String) {
    let status = match &err {
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Completion(CompletionError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
        DomainError::Completion(_) => StatusCode::BAD_GATEWAY,
        DomainError::Clipboard(_) | DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}
