pub mod health;

use anyhow::{Context, Result};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::health_handler))
        .route("/", get(health::root_handler))
        .route("/api/generate", post(handlers::handle_generate))
        .with_state(state)
}

/// CORS for a single configured origin, or any origin when none is set.
pub fn cors_layer(frontend_origin: Option<&str>) -> Result<CorsLayer> {
    let origin = match frontend_origin {
        Some(origin) => AllowOrigin::exact(
            HeaderValue::from_str(origin)
                .with_context(|| format!("FRONTEND_ORIGIN '{origin}' is not a valid header value"))?,
        ),
        None => AllowOrigin::any(),
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}
