//! SQL Parser
//!
//! A hand-written recursive descent parser with precedence climbing for
//! expressions.

mod error;
mod parser;
mod precedence;

pub use error::{ParseError, ParseErrorKind};
pub use parser::Parser;
pub use precedence::Precedence;
