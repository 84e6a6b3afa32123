//! Generation pipeline: normalized request → prompt → one model call → one line.
//!
//! There is no request-level retry. The only retries are the ones the
//! `TextGenerator` implementation performs internally.

use tracing::{debug, warn};

use crate::errors::AppError;
use crate::generation::normalize::NormalizedRequest;
use crate::generation::prompts::build_prompt;
use crate::generation::validator::LineValidator;
use crate::llm_client::TextGenerator;

/// Runs the model once for `request` and returns the line to relay.
pub async fn generate_line(
    generator: &dyn TextGenerator,
    validator: &dyn LineValidator,
    request: &NormalizedRequest,
) -> Result<String, AppError> {
    let prompt = build_prompt(request);

    let text = generator.generate(&prompt).await?;
    debug!("AI OUTPUT: {text:?}");

    let line = first_line(&text).ok_or(AppError::EmptyResponse)?;

    validator.review(line.to_string()).map_err(|rejected| {
        warn!("{rejected}");
        AppError::EmptyResponse
    })
}

/// First non-blank line of the completion, trimmed.
pub fn first_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|line| !line.is_empty())
}
