//! Operator precedence levels for the expression grammar.
//!
//! Each binary level parses its operands at the next-tighter level and folds
//! operators of its own level left to right, which makes every binary
//! operator left associative.

use crate::ast::{BinaryOp, DataType, Function};
use crate::lexer::{Keyword, TokenKind};

/// Binary precedence levels, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// `OR`
    Or,
    /// `AND`
    And,
    /// `=`, `!=`
    Equality,
    /// `<`, `<=`, `>`, `>=`
    Relational,
    /// `+`, `-`
    Additive,
    /// `*`, `/`
    Multiplicative,
}

impl Precedence {
    /// The level a full expression starts at.
    pub const LOWEST: Self = Self::Or;

    /// Returns the next tighter binary level, or `None` past the
    /// multiplicative level (where unary and primary expressions start).
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Or => Some(Self::And),
            Self::And => Some(Self::Equality),
            Self::Equality => Some(Self::Relational),
            Self::Relational => Some(Self::Additive),
            Self::Additive => Some(Self::Multiplicative),
            Self::Multiplicative => None,
        }
    }

    /// Returns the level an operator belongs to.
    #[must_use]
    pub const fn of(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Or => Self::Or,
            BinaryOp::And => Self::And,
            BinaryOp::Equal | BinaryOp::NotEqual => Self::Equality,
            BinaryOp::LessThan
            | BinaryOp::LessEqual
            | BinaryOp::GreaterThan
            | BinaryOp::GreaterEqual => Self::Relational,
            BinaryOp::Add | BinaryOp::Subtract => Self::Additive,
            BinaryOp::Multiply | BinaryOp::Divide => Self::Multiplicative,
        }
    }

    /// Returns the operator for `kind` if it belongs to this level.
    #[must_use]
    pub fn binary_op(self, kind: TokenKind) -> Option<BinaryOp> {
        token_to_binary_op(kind).filter(|op| Self::of(*op) == self)
    }
}

/// Converts a token to a binary operator.
#[must_use]
pub const fn token_to_binary_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Subtract),
        TokenKind::Star => Some(BinaryOp::Multiply),
        TokenKind::Slash => Some(BinaryOp::Divide),
        TokenKind::Eq => Some(BinaryOp::Equal),
        TokenKind::NotEq => Some(BinaryOp::NotEqual),
        TokenKind::Lt => Some(BinaryOp::LessThan),
        TokenKind::LtEq => Some(BinaryOp::LessEqual),
        TokenKind::Gt => Some(BinaryOp::GreaterThan),
        TokenKind::GtEq => Some(BinaryOp::GreaterEqual),
        TokenKind::Keyword(Keyword::And) => Some(BinaryOp::And),
        TokenKind::Keyword(Keyword::Or) => Some(BinaryOp::Or),
        _ => None,
    }
}

/// Converts a function keyword to the function it names.
#[must_use]
pub const fn keyword_to_function(keyword: Keyword) -> Option<Function> {
    match keyword {
        Keyword::Sin => Some(Function::Sin),
        Keyword::Cos => Some(Function::Cos),
        Keyword::Substr => Some(Function::Substr),
        _ => None,
    }
}

/// Converts a type keyword to its data type.
#[must_use]
pub const fn keyword_to_data_type(keyword: Keyword) -> Option<DataType> {
    match keyword {
        Keyword::Int | Keyword::Integer => Some(DataType::Int),
        Keyword::String | Keyword::Text | Keyword::Varchar => Some(DataType::String),
        Keyword::Bool | Keyword::Boolean => Some(DataType::Bool),
        Keyword::Decimal | Keyword::Double | Keyword::Float => Some(DataType::Decimal),
        _ => None,
    }
}

/// Returns true if `kind` closes a select list or a VALUES row.
#[must_use]
pub const fn ends_expression_list(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::RightParen
            | TokenKind::Semicolon
            | TokenKind::Eof
            | TokenKind::Keyword(Keyword::From | Keyword::Where)
    )
}
