use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Whether the generated line mocks the target or flirts with them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Roast,
    Compliment,
}

/// Intensity dial applied within a mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Soft,
    #[default]
    Normal,
    Savage,
}

/// Register of the generated line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    #[default]
    Hinglish,
}

impl Mode {
    /// Anything other than exactly `"compliment"` is a roast.
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "compliment" => Mode::Compliment,
            _ => Mode::Roast,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Roast => "roast",
            Mode::Compliment => "compliment",
        }
    }
}

impl Tone {
    /// `"soft"` and `"savage"` are kept; everything else becomes `normal`.
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "soft" => Tone::Soft,
            "savage" => Tone::Savage,
            _ => Tone::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Soft => "soft",
            Tone::Normal => "normal",
            Tone::Savage => "savage",
        }
    }
}

impl Language {
    /// Only `"english"` opts out of the Hinglish default.
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "english" => Language::English,
            _ => Language::Hinglish,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hinglish => "hinglish",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/generate` as sent by the client.
///
/// The server never deserializes into this type directly: it accepts any JSON
/// and normalizes it field by field (see `generation::normalize`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub mode: Mode,
    pub tone: Tone,
    pub language: Language,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub traits: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub inside_joke: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

/// Success body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReply {
    pub line: String,
}
