//! Clipboard Routes - Copy the generated prompt

use axum::{extract::State, routing::post, Json, Router};

use super::error_response;
use crate::models::{CopyRequest, PageSnapshot};
use crate::AppState;

/// Copy text (default: the current output) to the host clipboard
#[utoipa::path(
    post,
    path = "/api/copy",
    request_body = CopyRequest,
    responses(
        (status = 200, description = "Copied; notice shown", body = PageSnapshot),
        (status = 500, description = "Clipboard unavailable or failed")
    ),
    tag = "Clipboard"
)]
pub async fn copy_output(
    State(state): State<AppState>,
    Json(payload): Json<CopyRequest>,
) -> Result<Json<PageSnapshot>, (axum::http::StatusCode, String)> {
    state
        .page
        .copy(payload.text)
        .await
        .map(Json)
        .map_err(error_response)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/copy", post(copy_output))
}
