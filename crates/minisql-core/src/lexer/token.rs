//! Token types for the SQL lexer.

use core::fmt;

use super::Position;

/// SQL keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Statements
    Create,
    Drop,
    Table,
    Insert,
    Into,
    Values,
    Select,
    From,
    Where,
    Delete,

    // Conditional DDL
    If,
    Not,
    Exists,

    // Logical operators
    And,
    Or,

    // Boolean literals
    True,
    False,

    // Data types
    Int,
    Integer,
    String,
    Text,
    Varchar,
    Bool,
    Boolean,
    Decimal,
    Double,
    Float,

    // Built-in functions
    Sin,
    Cos,
    Substr,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "CREATE" => Some(Self::Create),
            "DROP" => Some(Self::Drop),
            "TABLE" => Some(Self::Table),
            "INSERT" => Some(Self::Insert),
            "INTO" => Some(Self::Into),
            "VALUES" => Some(Self::Values),
            "SELECT" => Some(Self::Select),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "DELETE" => Some(Self::Delete),
            "IF" => Some(Self::If),
            "NOT" => Some(Self::Not),
            "EXISTS" => Some(Self::Exists),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "TRUE" => Some(Self::True),
            "FALSE" => Some(Self::False),
            "INT" => Some(Self::Int),
            "INTEGER" => Some(Self::Integer),
            "STRING" => Some(Self::String),
            "TEXT" => Some(Self::Text),
            "VARCHAR" => Some(Self::Varchar),
            "BOOL" => Some(Self::Bool),
            "BOOLEAN" => Some(Self::Boolean),
            "DECIMAL" => Some(Self::Decimal),
            "DOUBLE" => Some(Self::Double),
            "FLOAT" => Some(Self::Float),
            "SIN" => Some(Self::Sin),
            "COS" => Some(Self::Cos),
            "SUBSTR" => Some(Self::Substr),
            _ => None,
        }
    }

    /// Returns the keyword as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Drop => "DROP",
            Self::Table => "TABLE",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Delete => "DELETE",
            Self::If => "IF",
            Self::Not => "NOT",
            Self::Exists => "EXISTS",
            Self::And => "AND",
            Self::Or => "OR",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Int => "INT",
            Self::Integer => "INTEGER",
            Self::String => "STRING",
            Self::Text => "TEXT",
            Self::Varchar => "VARCHAR",
            Self::Bool => "BOOL",
            Self::Boolean => "BOOLEAN",
            Self::Decimal => "DECIMAL",
            Self::Double => "DOUBLE",
            Self::Float => "FLOAT",
            Self::Sin => "SIN",
            Self::Cos => "COS",
            Self::Substr => "SUBSTR",
        }
    }

    /// Returns true if this keyword names a built-in function.
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Substr)
    }
}

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    /// Integer literal (e.g., 42)
    IntegerLiteral,
    /// Decimal literal (e.g., 3.14)
    DecimalLiteral,
    /// String literal (e.g., 'hello'); the token text holds the unescaped value
    StringLiteral,

    // Identifiers and keywords
    /// Identifier (e.g., column_name)
    Identifier,
    /// SQL keyword
    Keyword(Keyword),

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// =
    Eq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,

    // Special
    /// End of input
    Eof,
}

impl TokenKind {
    /// Human readable description used in diagnostics.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::IntegerLiteral => "integer literal",
            Self::DecimalLiteral => "decimal literal",
            Self::StringLiteral => "string literal",
            Self::Identifier => "identifier",
            Self::Keyword(kw) => kw.as_str(),
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Eq => "'='",
            Self::NotEq => "'!='",
            Self::Lt => "'<'",
            Self::LtEq => "'<='",
            Self::Gt => "'>'",
            Self::GtEq => "'>='",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::Dot => "'.'",
            Self::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A token with its normalized text and source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// Normalized lexeme: uppercased for keywords and identifiers,
    /// unescaped for string literals, verbatim otherwise.
    pub text: String,
    /// Where the token starts in the source.
    pub position: Position,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Creates an end-of-input token.
    #[must_use]
    pub const fn eof(position: Position) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: String::new(),
            position,
        }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if this is a keyword.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self.kind, TokenKind::Keyword(_))
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }

    /// Short description of the token for diagnostics, e.g. `identifier 'USERS'`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Identifier
            | TokenKind::IntegerLiteral
            | TokenKind::DecimalLiteral
            | TokenKind::StringLiteral => format!("{} '{}'", self.kind, self.text),
            _ => self.kind.describe().to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {:?} {:?}",
            self.position.line, self.position.column, self.kind, self.text
        )
    }
}
