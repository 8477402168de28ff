//! Core domain errors.

use thiserror::Error;

/// Core domain errors for the chatbot.
///
/// Conversation handling itself never fails; these only arise while
/// building a response table at start-up.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Two triggers collide once lowercased.
    #[error("Duplicate trigger: '{0}'")]
    DuplicateTrigger(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
