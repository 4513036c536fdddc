//! Handling of one statement per request.

use minisql_core::{Lexer, ParseError, Status, Token};
use tracing::debug;

use crate::response::{Response, Table};

/// What to do with each statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Parse and answer `OK` or the diagnostic.
    Check,
    /// Parse and return the tree.
    Parse,
    /// Parse and return canonical SQL.
    Sql,
    /// Return the token stream.
    Tokens,
}

/// Handles one statement. Every call parses with a fresh parser.
#[must_use]
pub fn handle(action: Action, sql: &str) -> Response {
    debug!(?action, sql, "handling statement");
    match action {
        Action::Check => minisql_core::parse(sql).map_or_else(Response::from, |_| Response::Ok),
        Action::Parse => minisql_core::parse(sql)
            .map_or_else(Response::from, |stmt| Response::Statement(Box::new(stmt))),
        Action::Sql => {
            minisql_core::parse(sql).map_or_else(Response::from, |stmt| Response::Sql(stmt.to_sql()))
        }
        Action::Tokens => tokens(sql),
    }
}

fn tokens(sql: &str) -> Response {
    match Lexer::new(sql).tokenize_all() {
        Ok(tokens) => Response::Rows(token_table(&tokens)),
        Err(err) => Response::Error(Status::from(ParseError::from(err))),
    }
}

fn token_table(tokens: &[Token]) -> Table {
    let mut table = Table::new(["LINE", "COLUMN", "KIND", "TEXT"]);
    for token in tokens {
        table.push_row(vec![
            token.position.line.to_string(),
            token.position.column.to_string(),
            token.kind.describe().to_string(),
            token.text.clone(),
        ]);
    }
    table
}
