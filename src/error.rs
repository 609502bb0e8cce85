//! TriviaTalk Error Types
//!
//! Centralized error handling for the game core and its collaborators.

use thiserror::Error;

/// Central error type for TriviaTalk
#[derive(Error, Debug)]
pub enum TriviaError {
    /// The daily dataset could not be fetched or decoded
    #[error("Game data unavailable: {0}")]
    DataUnavailable(String),

    /// The correct answer is not phrased as "... is X" / "... are X"
    #[error("Malformed answer for clue {index}: '{answer}'")]
    MalformedAnswer { index: usize, answer: String },

    /// The correct-answer index is missing, not a number, or out of range
    #[error("Invalid correct-answer index for clue {index}: '{raw}'")]
    AnswerIndex { index: usize, raw: String },

    #[error("Invalid turn: {0}")]
    InvalidTurn(String),

    /// Transport or status failure talking to the provider
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Result type alias for TriviaTalk operations
pub type TriviaResult<T> = Result<T, TriviaError>;

impl TriviaError {
    /// True for failures caused by the provider's data rather than by the user
    pub fn is_data_integrity(&self) -> bool {
        matches!(
            self,
            TriviaError::MalformedAnswer { .. } | TriviaError::AnswerIndex { .. }
        )
    }
}
