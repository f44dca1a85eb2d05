use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::{CommandClipboard, OpenAiClient};
use application::{NoticeBoard, PageService, PromptGenerator};
use config::AppConfig;
use metaprompt::{ClipboardService, CompletionProvider};

const DEFAULT_LOG_FILTER: &str = "info,metaprompt_server=debug,tower_http=info";

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub page: PageService,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    model: String,
    version: String,
}

async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Metaprompt is running".to_string(),
        model: state.page.model_id().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router for `state`
pub fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::page::router())
        .merge(routes::generate::router())
        .merge(routes::clipboard::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("⚠️  Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("👋 Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("✨ Metaprompt initializing...");

    let config = AppConfig::load()?;
    tracing::debug!("Configuration: {:?}", config);

    let provider: Arc<dyn CompletionProvider> =
        Arc::new(OpenAiClient::new(config.completion.clone())?);
    tracing::info!(
        "🤖 Completion client ready: {} at {}",
        config.completion.model,
        config.completion.base_url
    );

    let clipboard: Arc<dyn ClipboardService> =
        Arc::new(CommandClipboard::new(config.clipboard_command.clone()));
    match &config.clipboard_command {
        Some(argv) => tracing::info!("📋 Clipboard command: {}", argv.join(" ")),
        None => tracing::info!("📋 Clipboard command: platform default"),
    }

    let state = AppState {
        page: PageService::new(
            Arc::new(PromptGenerator::new(provider).with_options(config.options.clone())),
            clipboard,
            NoticeBoard::new(config.notice_delay),
        ),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    let addr = listener.local_addr()?;

    tracing::info!("📚 Swagger UI: http://{}/swagger-ui", addr);
    tracing::info!("✅ Metaprompt ready at http://{}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
