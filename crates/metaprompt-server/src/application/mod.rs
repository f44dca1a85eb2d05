//! Application Layer (Use Cases)
//!
//! Orchestrates the composer, the completion provider, the clipboard and
//! the page state behind the HTTP routes.

mod generator;
mod notice;
mod page;
mod page_service;

#[cfg(test)]
pub mod testing;

pub use generator::PromptGenerator;
pub use notice::NoticeBoard;
pub use page::{PageState, PageView};
pub use page_service::PageService;
