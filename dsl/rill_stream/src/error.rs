//! Structural error taxonomy for cursor operations.
//!
//! Two failure classes, both contract violations the cursor does not
//! recover from itself: reading or moving past a sequence boundary,
//! and a required delimiter missing where a structural helper demands
//! one. The consumer decides whether to report and continue or abort.

use thiserror::Error;

/// Error raised by fallible [`TokenCursor`](crate::TokenCursor)
/// operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StreamError {
    /// A read or move would cross a sequence boundary (token stream
    /// position or line index).
    #[error("position {index} is out of bounds (limit {limit})")]
    OutOfBounds { index: usize, limit: usize },

    /// A structural helper required a delimiter that was not there.
    #[error("expected `{0}`")]
    ExpectedToken(String),
}

impl StreamError {
    pub(crate) fn expected(token: &str) -> Self {
        StreamError::ExpectedToken(token.to_owned())
    }
}

/// Shorthand for results of cursor operations.
pub type StreamResult<T> = Result<T, StreamError>;
