//! Generate Routes - Meta-prompt generation

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use super::error_response;
use crate::models::{GenerateRequest, PageSnapshot};
use crate::AppState;

/// Generate a system prompt for a task description or existing prompt
#[utoipa::path(
    post,
    path = "/api/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Prompt generated", body = PageSnapshot),
        (status = 409, description = "A generation is already running"),
        (status = 502, description = "Completion service failed"),
        (status = 504, description = "Completion service timed out")
    ),
    tag = "Generate"
)]
pub async fn generate_prompt(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<PageSnapshot>, (axum::http::StatusCode, String)> {
    tracing::info!(
        "Generate requested ({} chars) with {}",
        payload.task.chars().count(),
        state.page.model_id()
    );

    state
        .page
        .generate(payload.task)
        .await
        .map(Json)
        .map_err(error_response)
}

/// Current page snapshot
#[utoipa::path(
    get,
    path = "/api/state",
    responses(
        (status = 200, description = "Current page state", body = PageSnapshot)
    ),
    tag = "Generate"
)]
pub async fn get_state(State(state): State<AppState>) -> Json<PageSnapshot> {
    Json(state.page.snapshot().await)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/generate", post(generate_prompt))
        .route("/api/state", get(get_state))
}
