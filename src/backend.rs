//! Extraction back-end selector.
//!
//! The set of back-ends is closed: a request names one by its wire tag and
//! the dispatcher matches on the enum, there is no registration step.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the four extraction back-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Mozilla Readability (via `dom_smoothie`).
    Readability,
    /// `<article>` or paragraph scraping.
    Simple,
    /// Mercury-style generic extractor.
    Postlight,
    /// Defuddle-style clutter removal.
    Defuddle,
}

impl Backend {
    /// All back-ends in the order the UI lists them.
    pub const ALL: [Backend; 4] = [
        Backend::Readability,
        Backend::Simple,
        Backend::Postlight,
        Backend::Defuddle,
    ];

    /// Wire tag used in `parserType`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Backend::Readability => "readability",
            Backend::Simple => "simple",
            Backend::Postlight => "postlight",
            Backend::Defuddle => "defuddle",
        }
    }

    /// Human readable label for selectors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Backend::Readability => "Readability",
            Backend::Simple => "Simple",
            Backend::Postlight => "Postlight",
            Backend::Defuddle => "Defuddle",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Backend::ALL
            .into_iter()
            .find(|backend| backend.as_str() == tag)
            .ok_or_else(|| Error::UnsupportedBackend(tag.to_string()))
    }
}
