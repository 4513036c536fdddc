//! Reading SQL input from the command line, a file, or standard input.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use minisql_core::{Lexer, TokenKind};
use tracing::debug;

use crate::error::{CliError, Result};

/// Returns the statements to handle.
///
/// An inline statement wins. Otherwise the file (or standard input when no
/// file is given) is read and split at each `;` outside strings and
/// comments, so a statement may span several lines.
///
/// # Errors
///
/// Returns a `CliError` if the file or standard input cannot be read.
pub fn read_statements(inline: Option<String>, file: Option<&Path>) -> Result<Vec<String>> {
    if let Some(sql) = inline {
        return Ok(vec![sql]);
    }
    let statements = match file {
        Some(path) => File::open(path)
            .and_then(statements_from_reader)
            .map_err(|source| CliError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?,
        None => statements_from_reader(io::stdin().lock()).map_err(CliError::Stdin)?,
    };
    debug!(count = statements.len(), "read statements");
    Ok(statements)
}

/// Reads all of `reader` and splits it with [`split_statements`].
///
/// # Errors
///
/// Returns the first I/O error.
pub fn statements_from_reader(mut reader: impl Read) -> io::Result<Vec<String>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(split_statements(&text))
}

/// Splits `text` at each `;` outside strings and comments.
///
/// Every statement keeps its `;` and is trimmed. Pieces holding only
/// whitespace and comments are dropped. Text the lexer rejects stays in its
/// statement so that parsing reports it.
#[must_use]
pub fn split_statements(text: &str) -> Vec<String> {
    let mut lexer = Lexer::new(text);
    let mut statements = Vec::new();
    let mut start = 0;
    let mut has_tokens = false;
    loop {
        match lexer.next_token() {
            Ok(token) if token.is_eof() => break,
            Ok(token) if token.kind == TokenKind::Semicolon => {
                let end = token.position.offset + 1;
                if has_tokens {
                    statements.push(text[start..end].trim().to_string());
                }
                start = end;
                has_tokens = false;
            }
            // Every lex error consumes input, so the loop still ends.
            Ok(_) | Err(_) => has_tokens = true,
        }
    }
    if has_tokens {
        statements.push(text[start..].trim().to_string());
    }
    statements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_statement_wins() {
        let statements = read_statements(Some(String::from("SELECT 1")), None).unwrap();
        assert_eq!(statements, vec!["SELECT 1"]);
    }

    #[test]
    fn test_blank_pieces_are_skipped() {
        let input = "SELECT 1;\n\n ; -- only a comment\n;\n  DROP TABLE t;  \n";
        let statements = statements_from_reader(input.as_bytes()).unwrap();
        assert_eq!(statements, vec!["SELECT 1;", "DROP TABLE t;"]);
    }

    #[test]
    fn test_statement_spans_lines() {
        let statements = split_statements("SELECT a\nFROM t\nWHERE a > 1;\nDROP TABLE t");
        assert_eq!(statements, vec!["SELECT a\nFROM t\nWHERE a > 1;", "DROP TABLE t"]);
    }

    #[test]
    fn test_semicolon_inside_string_or_comment() {
        let statements =
            split_statements("INSERT INTO t VALUES ('a;b'); /* x; y */ SELECT 1 -- z;\n");
        assert_eq!(
            statements,
            vec!["INSERT INTO t VALUES ('a;b');", "/* x; y */ SELECT 1 -- z;"]
        );
    }

    #[test]
    fn test_lex_error_stays_in_its_statement() {
        let statements = split_statements("SELECT a ! b; SELECT 'open");
        assert_eq!(statements, vec!["SELECT a ! b;", "SELECT 'open"]);
    }

    #[test]
    fn test_missing_file() {
        let err = read_statements(None, Some(Path::new("/definitely/not/here.sql"))).unwrap_err();
        assert!(matches!(err, CliError::ReadFile { .. }));
        assert!(err.to_string().starts_with("Failed to read '/definitely/not/here.sql'"));
    }
}
