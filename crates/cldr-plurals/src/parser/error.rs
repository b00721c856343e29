//! Parse error types for plural rule conditions.

use thiserror::Error;

/// A condition string that does not match the CLDR rule grammar.
///
/// `position` is 1-based and counts characters, pointing just past the last
/// token that was consumed successfully.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at position {position}: {message}")]
pub struct ParseError {
    pub position: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(position: usize, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}
