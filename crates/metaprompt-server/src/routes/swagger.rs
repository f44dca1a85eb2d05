//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CopyRequest, GenerateRequest, GenerationInfo, NoticeView, PageSnapshot, StatusView,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Generate endpoints
        super::generate::generate_prompt,
        super::generate::get_state,
        // Clipboard endpoints
        super::clipboard::copy_output,
    ),
    info(
        title = "Metaprompt API",
        version = "0.1.0",
        description = "Turns a task description or draft prompt into a complete system prompt via a meta-prompt.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Generate", description = "Generate - Meta-prompt driven system prompt generation"),
        (name = "Clipboard", description = "Clipboard - Copy generated prompts to the host clipboard"),
    ),
    components(
        schemas(
            // Generate
            GenerateRequest,
            PageSnapshot,
            StatusView,
            NoticeView,
            GenerationInfo,
            // Clipboard
            CopyRequest,
        )
    ),
)]
pub struct ApiDoc;
