//! Service Ports
//!
//! Abstract interfaces for external services.

mod clipboard;
mod completion;

pub use clipboard::*;
pub use completion::*;
