//! Metaprompt Domain Library
//!
//! Core types and interfaces for turning a task description into a full
//! system prompt with the help of a chat-completion model.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure types and logic
//!   - `entities/`: Chat messages, composed requests, generated prompts
//!   - `services/`: The prompt composer and the meta-prompt text
//!   - `value_objects/`: Generation status, copy notice
//!   - `errors/`: Completion, clipboard and domain error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Completion provider and clipboard interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use metaprompt::{compose, CompletionProvider};
//!
//! let request = compose("Summarize articles in two sentences.");
//! let response = provider.complete(request.messages(), &CompletionOptions::default()).await?;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    compose, decorate, ChatMessage, ClipboardError, CompletionError, DomainError,
    GeneratedPrompt, GenerationStatus, MessageRole, Notice, PromptRequest, COPIED_NOTICE,
    DISPLAY_PREFIX, META_PROMPT, TASK_LABEL,
};
pub use ports::{
    ClipboardService, CompletionOptions, CompletionProvider, CompletionResponse, TokenUsage,
};
