//! Deployment language for the seed greeting and the fallback reply.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Swahili,
    English,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported language: {0} (expected \"sw\" or \"en\")")]
pub struct ParseLanguageError(String);

impl Language {
    /// Opening user turn introducing the customer and the assistant's brief.
    #[must_use]
    pub fn greeting(self, display_name: &str, instruction: &str) -> String {
        match self {
            Self::Swahili => format!("Naitwa {display_name} nahitaji {instruction}"),
            Self::English => format!("My name is {display_name}, I need {instruction}"),
        }
    }

    /// Reply sent to the user whenever generation fails.
    #[must_use]
    pub const fn fallback_reply(self) -> &'static str {
        match self {
            Self::Swahili => "Samahani, kuna tatizo. Tafadhali jaribu tena baadaye.",
            Self::English => "Sorry, there is a problem. Please try again later.",
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Swahili => "sw",
            Self::English => "en",
        }
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sw" | "swahili" => Ok(Self::Swahili),
            "en" | "english" => Ok(Self::English),
            other => Err(ParseLanguageError(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
