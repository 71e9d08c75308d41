//! Error types for the conference model.

use thiserror::Error;

/// Errors produced by the conference model.
///
/// The model performs no I/O and no resource acquisition; its only fallible
/// surface is interpreting externally supplied state tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A state token outside the endpoint-status value set.
    #[error("Unknown member state: {0}")]
    UnknownState(String),
}

/// Result type alias using `ModelError`
pub type Result<T> = std::result::Result<T, ModelError>;
