//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod clipboard;
pub mod openai;

// Re-exports
pub use clipboard::CommandClipboard;
pub use openai::OpenAiClient;
