use std::net::SocketAddr;
use std::sync::Arc;

mod handlers;
mod models;
mod state;
mod template;
mod upload;

use cvparse_core::LlmConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let llm_config = LlmConfig::from_env();
    if llm_config.api_key.is_none() {
        tracing::warn!(
            "no API key configured; uploads will fail until LLM_API_KEY or OPENAI_API_KEY is set"
        );
    }
    tracing::info!(config = ?llm_config, "loaded language model configuration");

    let state = Arc::new(AppState { llm_config });

    // Resumes are small; 20MB leaves room for image-heavy exports
    let body_limit = axum::extract::DefaultBodyLimit::max(20 * 1024 * 1024);
    // The demo frontend may be served from a different origin
    let cors = tower_http::cors::CorsLayer::permissive();

    let app = axum::Router::new()
        .route("/", axum::routing::get(handlers::index::index))
        .route(
            "/api/v1/upload-file",
            axum::routing::post(handlers::parse::upload_file),
        )
        .layer(cors)
        .layer(body_limit)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
