//! # minisql-core
//!
//! The SQL front-end of a small embedded database.
//!
//! This crate provides:
//! - A hand-written lexer with line/column tracking
//! - A recursive descent parser with precedence climbing for expressions
//! - An immutable AST with a visitor protocol and a canonical SQL renderer
//! - The `Status` type used to report outcomes to callers
//!
//! ## Parsing
//!
//! ```rust
//! use minisql_core::ast::{BinaryOp, Statement};
//!
//! let stmt = minisql_core::parse("select name from users where age > 18;").unwrap();
//! let Statement::Select(select) = &stmt else { unreachable!() };
//!
//! // Identifiers are uppercased by the lexer
//! assert_eq!(select.from_table.as_ref().unwrap().table_name, "USERS");
//! assert_eq!(select.where_clause.as_ref().unwrap().as_binary().unwrap().op, BinaryOp::GreaterThan);
//!
//! // Rendering gives canonical SQL that parses back to the same tree
//! assert_eq!(stmt.to_sql(), "SELECT NAME FROM USERS WHERE (AGE > 18)");
//! ```
//!
//! ## Diagnostics
//!
//! ```rust
//! let err = minisql_core::parse("SELECT * FROM").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Parse error at line 1, column 14: expected table name, found end of input"
//! );
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod status;

pub use ast::{DataType, Expr, Statement, Visitor};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{ParseError, Parser};
pub use status::{Status, StatusCode};

/// Parses one SQL statement with a fresh [`Parser`].
///
/// # Errors
///
/// Returns the first `ParseError` encountered.
pub fn parse(sql: &str) -> Result<Statement, ParseError> {
    Parser::new(sql).parse_statement()
}
