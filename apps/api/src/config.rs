use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_TEMPERATURE: f32 = 0.9;
const DEFAULT_MAX_RETRIES: u32 = 2;
const MAX_RETRIES_LIMIT: u32 = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables at startup.
/// There is no hot-reload: restart the process to pick up changes.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Single allowed CORS origin. `None` means any origin.
    pub frontend_origin: Option<String>,
    pub google_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub temperature: f32,
    /// Retries after the first attempt, so `2` means at most three calls.
    pub max_retries: u32,
    /// Upper bound on a single attempt against the generation service.
    pub generation_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let frontend_origin = var("FRONTEND_ORIGIN").filter(|origin| origin != "*");

        let temperature = parse_or(var("GEMINI_TEMPERATURE"), DEFAULT_TEMPERATURE)
            .context("GEMINI_TEMPERATURE must be a number")?;
        anyhow::ensure!(
            (0.0..=2.0).contains(&temperature),
            "GEMINI_TEMPERATURE must be between 0.0 and 2.0"
        );

        let generation_timeout_secs =
            parse_or(var("GENERATION_TIMEOUT_SECS"), DEFAULT_TIMEOUT_SECS)
                .context("GENERATION_TIMEOUT_SECS must be a positive integer")?;
        anyhow::ensure!(
            generation_timeout_secs > 0,
            "GENERATION_TIMEOUT_SECS must be a positive integer"
        );

        let max_retries = parse_or(var("GEMINI_MAX_RETRIES"), DEFAULT_MAX_RETRIES)
            .context("GEMINI_MAX_RETRIES must be a non-negative integer")?;
        anyhow::ensure!(
            max_retries <= MAX_RETRIES_LIMIT,
            "GEMINI_MAX_RETRIES must be at most {MAX_RETRIES_LIMIT}"
        );

        Ok(Config {
            port: parse_or(var("PORT"), DEFAULT_PORT)
                .context("PORT must be a valid port number")?,
            frontend_origin,
            google_api_key: var("GOOGLE_API_KEY")
                .context("Required environment variable 'GOOGLE_API_KEY' is not set")?,
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_api_base: var("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            temperature,
            max_retries,
            generation_timeout_secs,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<T>(raw: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => Ok(value.trim().parse::<T>()?),
        None => Ok(default),
    }
}
