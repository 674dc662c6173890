//! Error types for readability-sandbox.
//!
//! Malformed HTML is deliberately absent: lenient parsing turns it into
//! empty or near-empty fields instead of an error.

/// Error type for extraction operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested back-end tag matches none of the known parsers.
    #[error("Unsupported parser type: {0}")]
    UnsupportedBackend(String),

    /// The selected back-end raised or returned nothing usable.
    #[error("Extraction failed: {0}")]
    ExtractionFailure(String),
}

impl Error {
    /// Whether the caller is at fault (unknown tag) rather than the back-end.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::UnsupportedBackend(_))
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
