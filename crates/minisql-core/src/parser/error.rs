//! Parser error types.

use core::fmt;

use crate::lexer::{LexError, Position, Token};

/// What went wrong while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ParseErrorKind {
    /// The lexer rejected the input.
    Lex,
    /// A token did not match the grammar.
    Syntax,
    /// A required list had no elements.
    Empty,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lex => "lex error",
            Self::Syntax => "syntax error",
            Self::Empty => "empty list",
        })
    }
}

/// A parse error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("Parse error at line {}, column {}: {message}", .position.line, .position.column)]
pub struct ParseError {
    /// The error class.
    pub kind: ParseErrorKind,
    /// The error message.
    pub message: String,
    /// Where the offending token starts.
    pub position: Position,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            message: message.into(),
            position,
        }
    }

    /// Creates an "expected X, found Y" syntax error at `found`.
    #[must_use]
    pub fn unexpected(expected: impl fmt::Display, found: &Token) -> Self {
        Self::new(
            ParseErrorKind::Syntax,
            format!("expected {expected}, found {}", found.describe()),
            found.position,
        )
    }

    /// Creates an empty-list error at `found`.
    #[must_use]
    pub fn empty(what: impl fmt::Display, found: &Token) -> Self {
        Self::new(
            ParseErrorKind::Empty,
            format!("{what} must not be empty"),
            found.position,
        )
    }

    /// Returns true if the error came from the lexer.
    #[must_use]
    pub const fn is_lex(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Lex)
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        Self::new(ParseErrorKind::Lex, err.message, err.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn test_display_format() {
        let err = ParseError::new(ParseErrorKind::Syntax, "boom", Position::new(10, 2, 7));
        assert_eq!(err.to_string(), "Parse error at line 2, column 7: boom");
    }

    #[test]
    fn test_unexpected_describes_token() {
        let token = Token::new(TokenKind::Identifier, "FOO", Position::new(4, 1, 5));
        let err = ParseError::unexpected("'('", &token);
        assert_eq!(err.kind, ParseErrorKind::Syntax);
        assert_eq!(err.message, "expected '(', found identifier 'FOO'");
        assert_eq!(err.position.column, 5);
    }

    #[test]
    fn test_from_lex_error() {
        let lex = LexError::new("unterminated string literal", Position::new(7, 1, 8));
        let err = ParseError::from(lex);
        assert!(err.is_lex());
        assert_eq!(
            err.to_string(),
            "Parse error at line 1, column 8: unterminated string literal"
        );
    }

    #[test]
    fn test_empty() {
        let token = Token::new(TokenKind::RightParen, ")", Position::new(16, 1, 17));
        let err = ParseError::empty("column list", &token);
        assert_eq!(err.kind, ParseErrorKind::Empty);
        assert_eq!(err.message, "column list must not be empty");
    }
}
