//! Request/state controller for the generate form.
//!
//! The controller is always in exactly one `Phase`. `output` and `error` are
//! never both set, and `loading` is only true between `begin` and `finish`.

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;

use crate::client::api::{ClientError, GenerateApi};
use crate::models::generation::{GenerationRequest, Language, Mode, Tone};

/// The only failure message the user ever sees.
pub const GENERIC_ERROR: &str = "Something went wrong 😭 Try again.";

/// How long the "copied" acknowledgment stays up after a copy.
pub const COPIED_FOR: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Result,
    Error,
}

/// Colors for the success effect. Drawing it is up to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    pub colors: [&'static str; 4],
}

pub fn celebration_palette(mode: Mode) -> Celebration {
    match mode {
        Mode::Roast => Celebration {
            colors: ["#ef4444", "#f97316", "#fbbf24", "#f87171"],
        },
        Mode::Compliment => Celebration {
            colors: ["#ec4899", "#a855f7", "#f472b6", "#c084fc"],
        },
    }
}

#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Default)]
pub struct GenerateController {
    mode: Mode,
    tone: Tone,
    language: Language,
    name: String,
    traits: String,
    inside_joke: String,
    relationship: String,
    output: String,
    error: String,
    loading: bool,
    copied_until: Option<Instant>,
}

impl GenerateController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.tone = tone;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.name != name {
            self.name = name;
            self.clear_result();
        }
    }

    pub fn set_traits(&mut self, traits: impl Into<String>) {
        let traits = traits.into();
        if self.traits != traits {
            self.traits = traits;
            self.clear_result();
        }
    }

    pub fn set_inside_joke(&mut self, inside_joke: impl Into<String>) {
        let inside_joke = inside_joke.into();
        if self.inside_joke != inside_joke {
            self.inside_joke = inside_joke;
            self.clear_result();
        }
    }

    pub fn set_relationship(&mut self, relationship: impl Into<String>) {
        let relationship = relationship.into();
        if self.relationship != relationship {
            self.relationship = relationship;
            self.clear_result();
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if !self.output.is_empty() {
            Phase::Result
        } else if !self.error.is_empty() {
            Phase::Error
        } else {
            Phase::Idle
        }
    }

    /// Starts a request. Returns `None` (and changes nothing) when the name is
    /// blank or a request is already in flight.
    pub fn begin(&mut self) -> Option<GenerationRequest> {
        if self.name.trim().is_empty() || self.loading {
            return None;
        }

        self.loading = true;
        self.error.clear();
        self.output.clear();

        let relationship = self.relationship.trim();
        Some(GenerationRequest {
            mode: self.mode,
            tone: self.tone,
            language: self.language,
            name: self.name.trim().to_string(),
            traits: self.traits.trim().to_string(),
            inside_joke: self.inside_joke.trim().to_string(),
            relationship: (!relationship.is_empty()).then(|| relationship.to_string()),
        })
    }

    /// Records the outcome of the request started by `begin`.
    /// Returns the celebration palette on success.
    pub fn finish(&mut self, outcome: Result<String, ClientError>) -> Option<Celebration> {
        self.loading = false;

        match outcome.and_then(|line| {
            let line = line.trim().to_string();
            if line.is_empty() {
                Err(ClientError::MissingLine)
            } else {
                Ok(line)
            }
        }) {
            Ok(line) => {
                self.error.clear();
                self.output = line;
                Some(celebration_palette(self.mode))
            }
            Err(e) => {
                debug!("generate failed: {e}");
                self.output.clear();
                self.error = GENERIC_ERROR.to_string();
                None
            }
        }
    }

    /// One full generate action: `begin`, the call, `finish`.
    /// No call is made when `begin` declines.
    pub async fn generate(&mut self, api: &dyn GenerateApi) -> Option<Celebration> {
        let request = self.begin()?;
        let outcome = api.generate(&request).await;
        self.finish(outcome)
    }

    /// Copies the current output. Returns `Ok(false)` when there is nothing to
    /// copy. A new copy restarts the acknowledgment window.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> Result<bool, ClipboardError> {
        if self.output.is_empty() {
            return Ok(false);
        }
        clipboard.write_text(&self.output)?;
        self.copied_until = Some(now + COPIED_FOR);
        Ok(true)
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }

    fn clear_result(&mut self) {
        self.output.clear();
        self.error.clear();
    }
}
