//! Lexer error type.

use super::Position;

/// Malformed input found while scanning: an unterminated string or
/// comment, or a character that starts no token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {position}")]
pub struct LexError {
    /// The error message.
    pub message: String,
    /// Where the offending lexeme starts.
    pub position: Position,
}

impl LexError {
    /// Creates a new lex error.
    #[must_use]
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}
