//! Error types for the hesab-search crate.

/// Error type for all fallible operations in the hesab-search crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Returned when a string is not one of the canonical result kinds.
    #[error("unknown search kind: {kind:?}")]
    UnknownKind {
        /// The unrecognised kind.
        kind: String,
    },

    /// Returned when a deployment prefix cannot be used as a URL path.
    #[error("invalid URL prefix: {prefix:?}")]
    InvalidPrefix {
        /// The rejected prefix.
        prefix: String,
    },

    /// Returned when a search response cannot be decoded.
    #[error("failed to decode search response: {message}")]
    Decode {
        /// Description of the decoding error.
        message: String,
    },
}

impl From<serde_json::Error> for SearchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode {
            message: e.to_string(),
        }
    }
}
