//! Axum route handlers for the Generation API.

use axum::{body::Bytes, extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::generate_line;
use crate::generation::normalize::{normalize, parse_body};
use crate::models::generation::GenerationReply;
use crate::state::AppState;

/// POST /api/generate
///
/// Takes the body as raw bytes so malformed or missing JSON still maps to
/// `VALIDATION_ERROR` instead of Axum's plain-text rejection.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerationReply>, AppError> {
    let raw = parse_body(&body)?;
    let request = normalize(&raw)?;

    let line = generate_line(state.generator.as_ref(), state.validator.as_ref(), &request).await?;

    Ok(Json(GenerationReply { line }))
}
