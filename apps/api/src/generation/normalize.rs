//! Input normalizer — turns an untrusted JSON body into a bounded `NormalizedRequest`.
//!
//! Never fails on oversized input: free text is truncated, not rejected.
//! Only the presence of `mode`, `tone`, `language` and `name` is enforced.

use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::models::generation::{Language, Mode, Tone};

pub const NAME_MAX: usize = 40;
pub const RELATIONSHIP_MAX: usize = 40;
pub const INSIDE_JOKE_MAX: usize = 200;
pub const TRAITS_TEXT_MAX: usize = 200;
pub const TRAIT_ITEM_MAX: usize = 60;
/// Non-blank items past this count in a sequence-form `traits` are dropped.
pub const TRAIT_ITEMS_MAX: usize = 10;

const NONE_SENTINEL: &str = "none";
const FRIEND_SENTINEL: &str = "friend";

const REQUIRED_MESSAGE: &str = "mode, tone, language, and name are required.";

/// A request after validation and normalization. Every string is bounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRequest {
    pub mode: Mode,
    pub tone: Tone,
    pub language: Language,
    pub name: String,
    pub relationship: String,
    pub traits_text: String,
    pub inside_joke: String,
}

/// Parses the raw request body. An empty body is treated as `{}`.
pub fn parse_body(raw: &[u8]) -> Result<Value, AppError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(raw)
        .map_err(|_| AppError::Validation("Request body must be valid JSON.".to_string()))
}

/// Validates presence of required fields, then coerces enums and bounds strings.
pub fn normalize(body: &Value) -> Result<NormalizedRequest, AppError> {
    let field = |key: &str| body.get(key).and_then(scalar_text);

    let (Some(mode), Some(tone), Some(language), Some(name)) =
        (field("mode"), field("tone"), field("language"), field("name"))
    else {
        return Err(AppError::Validation(REQUIRED_MESSAGE.to_string()));
    };

    let name = sanitize(&name, NAME_MAX);
    if name.is_empty() {
        return Err(AppError::Validation(REQUIRED_MESSAGE.to_string()));
    }

    let request = NormalizedRequest {
        mode: Mode::coerce(&mode),
        tone: Tone::coerce(&tone),
        language: Language::coerce(&language),
        name,
        relationship: or_sentinel(
            sanitize(&field("relationship").unwrap_or_default(), RELATIONSHIP_MAX),
            FRIEND_SENTINEL,
        ),
        traits_text: traits_text(body.get("traits")),
        inside_joke: or_sentinel(
            sanitize(&field("insideJoke").unwrap_or_default(), INSIDE_JOKE_MAX),
            NONE_SENTINEL,
        ),
    };

    info!(
        mode = %request.mode,
        tone = %request.tone,
        language = %request.language,
        name = %request.name,
        "Generate request"
    );

    Ok(request)
}

/// Keeps at most `max_chars` characters, then trims surrounding whitespace.
pub fn sanitize(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect::<String>().trim().to_string()
}

/// Text form of a scalar JSON value. Null, blank strings, `false`, arrays and
/// objects count as absent.
fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "true".to_string(),
        _ => return None,
    };
    (!text.trim().is_empty()).then_some(text)
}

fn traits_text(traits: Option<&Value>) -> String {
    let text = match traits {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(scalar_text)
            .map(|item| sanitize(&item, TRAIT_ITEM_MAX))
            .filter(|item| !item.is_empty())
            .take(TRAIT_ITEMS_MAX)
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::String(s)) => sanitize(s, TRAITS_TEXT_MAX),
        _ => String::new(),
    };
    or_sentinel(text, NONE_SENTINEL)
}

fn or_sentinel(value: String, sentinel: &str) -> String {
    if value.is_empty() {
        sentinel.to_string()
    } else {
        value
    }
}
