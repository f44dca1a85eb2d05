//! Domain Services
//!
//! Stateless logic that operates on domain entities.

mod composer;

pub use composer::*;
