//! Command-line front-end for the minisql parser.
//!
//! Each input statement gets a fresh parser, and every answer uses the
//! request-layer wire format:
//!
//! - `OK` for a success without rows
//! - a text table for row results
//! - `ERROR: <message>` for a failure
//!
//! # CLI Usage
//!
//! ```bash
//! # Check a statement
//! minisql check "SELECT * FROM users"
//!
//! # Print the parsed tree, as JSON
//! minisql --format json parse "DELETE FROM users WHERE id = 1"
//!
//! # Canonical SQL for every line of a file
//! minisql sql --file queries.sql
//!
//! # Token stream from stdin
//! echo "SELECT 1" | minisql tokens
//! ```

pub mod error;
pub mod handler;
pub mod input;
pub mod response;

pub use error::CliError;
pub use handler::{handle, Action};
pub use input::read_statements;
pub use response::{OutputFormat, Response, Table};
