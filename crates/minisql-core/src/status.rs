//! Operation status shared between the parser, the executor and the request
//! layer.

use core::fmt;

use crate::parser::ParseError;

/// Status classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum StatusCode {
    /// The operation succeeded.
    Ok,
    /// The statement text could not be parsed.
    ParseError,
    /// A transport failure.
    NetworkError,
    /// A parsed statement failed while running.
    ExecutionError,
    /// A table, column or row does not exist.
    NotFound,
}

impl StatusCode {
    /// Returns the label used when the status is displayed.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::ParseError => "parse error",
            Self::NetworkError => "network error",
            Self::ExecutionError => "execution error",
            Self::NotFound => "not found",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of an operation: a code plus a free-text message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Status {
    code: StatusCode,
    message: String,
}

impl Status {
    fn new(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// A successful status.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            code: StatusCode::Ok,
            message: String::new(),
        }
    }

    /// A parse failure.
    #[must_use]
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::ParseError, message)
    }

    /// A transport failure.
    #[must_use]
    pub fn network_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NetworkError, message)
    }

    /// A failure while executing a statement.
    #[must_use]
    pub fn execution_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::ExecutionError, message)
    }

    /// A missing table, column or row.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NotFound, message)
    }

    /// Returns the status class.
    #[must_use]
    pub const fn code(&self) -> StatusCode {
        self.code
    }

    /// Returns the message, empty for `OK`.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true for `OK`.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.code, StatusCode::Ok)
    }

    /// Returns true for a parse error.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self.code, StatusCode::ParseError)
    }

    /// Returns true for a network error.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self.code, StatusCode::NetworkError)
    }

    /// Returns true for an execution error.
    #[must_use]
    pub const fn is_execution_error(&self) -> bool {
        matches!(self.code, StatusCode::ExecutionError)
    }

    /// Returns true for a not-found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.code, StatusCode::NotFound)
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::ok()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            f.write_str(self.code.as_str())
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Status {}

impl From<ParseError> for Status {
    fn from(err: ParseError) -> Self {
        Self::parse_error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Position;
    use crate::parser::ParseErrorKind;

    #[test]
    fn test_ok() {
        let status = Status::ok();
        assert!(status.is_ok());
        assert!(!status.is_parse_error());
        assert_eq!(status.message(), "");
        assert_eq!(status.to_string(), "OK");
        assert_eq!(Status::default(), status);
    }

    #[test]
    fn test_predicates_match_constructor() {
        assert!(Status::parse_error("x").is_parse_error());
        assert!(Status::network_error("x").is_network_error());
        assert!(Status::execution_error("x").is_execution_error());
        assert!(Status::not_found("x").is_not_found());
        assert!(!Status::not_found("x").is_ok());
    }

    #[test]
    fn test_display_with_message() {
        let status = Status::not_found("table T");
        assert_eq!(status.code(), StatusCode::NotFound);
        assert_eq!(status.to_string(), "not found: table T");
    }

    #[test]
    fn test_from_parse_error_keeps_diagnostic() {
        let err = ParseError::new(ParseErrorKind::Syntax, "bad", Position::new(0, 1, 1));
        let status = Status::from(err);
        assert!(status.is_parse_error());
        assert_eq!(status.message(), "Parse error at line 1, column 1: bad");
    }
}
