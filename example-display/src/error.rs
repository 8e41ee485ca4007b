//! Error types

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::DisplayConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("Invalid display config: {0}")]
    Parse(#[from] serde_json::Error),

    /// An element id was empty.
    #[error("Element id for the {role} must not be empty")]
    EmptyId {
        /// Which element the id addresses.
        role: &'static str,
    },

    /// Both elements were given the same id.
    #[error("Content block and trigger control share the id '{0}'")]
    SharedId(String),

    /// The fade duration lies outside the allowed window.
    #[error("Fade duration {actual_ms}ms is outside {min_ms}..={max_ms}ms")]
    FadeOutOfRange {
        actual_ms: u64,
        min_ms: u64,
        max_ms: u64,
    },
}
