//! Word pairs and the languages they come in.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::GameError;

/// A (general, specific) pairing drawn once per game.
///
/// Innocents are told `specific`, the insider is told `general`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    pub general: String,
    pub specific: String,
}

impl WordPair {
    pub fn new(general: impl Into<String>, specific: impl Into<String>) -> Self {
        Self {
            general: general.into(),
            specific: specific.into(),
        }
    }
}

impl std::fmt::Display for WordPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.general, self.specific)
    }
}

/// Word-bank variant. Only decides which list is sampled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Malayalam,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Malayalam];
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "english"),
            Language::Malayalam => write!(f, "malayalam"),
        }
    }
}

impl FromStr for Language {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "malayalam" | "ml" => Ok(Language::Malayalam),
            other => Err(GameError::UnknownLanguage(other.to_string())),
        }
    }
}
