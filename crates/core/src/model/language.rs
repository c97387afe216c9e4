use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Two-way language selector for content and speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Hi,
}

impl Language {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    /// BCP-47 tag handed to the speech collaborator.
    #[must_use]
    pub fn speech_tag(self) -> &'static str {
        match self {
            Language::En => "en-IN",
            Language::Hi => "hi-IN",
        }
    }

    /// Pick between an English and a Hindi string.
    #[must_use]
    pub fn pick<'a>(self, en: &'a str, hi: &'a str) -> &'a str {
        match self {
            Language::En => en,
            Language::Hi => hi,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "hi" => Ok(Self::Hi),
            other => Err(ParseError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Grade band the explainer is pitched at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AgeBand {
    /// Grades 1-2.
    #[default]
    #[serde(rename = "g1-2")]
    Early,
    /// Grades 3-5.
    #[serde(rename = "g3-5")]
    Middle,
}

impl AgeBand {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            AgeBand::Early => "g1-2",
            AgeBand::Middle => "g3-5",
        }
    }
}

impl FromStr for AgeBand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "g1-2" => Ok(Self::Early),
            "g3-5" => Ok(Self::Middle),
            other => Err(ParseError::UnknownAgeBand(other.to_string())),
        }
    }
}
