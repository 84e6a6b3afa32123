use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use roast_api::config::Config;
use roast_api::generation::validator::PassThroughValidator;
use roast_api::llm_client::{LlmClient, LlmSettings};
use roast_api::routes::{build_router, cors_layer};
use roast_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Roast & Compliment API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client, shared by every request
    let llm = LlmClient::new(LlmSettings {
        base_url: config.gemini_api_base.clone(),
        api_key: config.google_api_key.clone(),
        model: config.gemini_model.clone(),
        temperature: config.temperature,
        max_retries: config.max_retries,
        timeout: Duration::from_secs(config.generation_timeout_secs),
        retry_delay: Duration::from_secs(1),
    })?;
    info!(
        "LLM client initialized (model: {}, temperature: {}, retries: {}, timeout: {}s)",
        llm.model(),
        config.temperature,
        config.max_retries,
        config.generation_timeout_secs
    );

    let cors = cors_layer(config.frontend_origin.as_deref())?;
    match &config.frontend_origin {
        Some(origin) => info!("CORS restricted to {origin}"),
        None => info!("CORS open to any origin"),
    }

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;

    let state = AppState {
        generator: Arc::new(llm),
        validator: Arc::new(PassThroughValidator),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    info!("Roast & Compliment API listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
