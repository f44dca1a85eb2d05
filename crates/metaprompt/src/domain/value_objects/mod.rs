//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod generation_status;
mod notice;

pub use generation_status::*;
pub use notice::*;
