//! SQL Lexer/Tokenizer
//!
//! This module provides a hand-written lexer for SQL that produces a stream of tokens.

mod error;
mod position;
mod token;
mod tokenizer;

pub use error::LexError;
pub use position::Position;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
