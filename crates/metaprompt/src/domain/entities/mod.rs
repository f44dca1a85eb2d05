//! Domain Entities
//!
//! - Message: Role-tagged chat message
//! - Prompt: Composed request and the generated result

mod message;
mod prompt;

pub use message::*;
pub use prompt::*;
