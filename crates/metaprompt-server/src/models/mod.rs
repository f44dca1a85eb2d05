//! Metaprompt Data Models
//!
//! Request and response bodies of the JSON API.

mod page;

pub use page::*;
