//! Expression AST types.

use core::fmt;

use super::types::DataType;
use super::visitor::Visitor;

/// A literal value. The source text is kept verbatim for numbers so the
/// executor decides how to convert it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Literal {
    /// Type implied by the literal's lexical form.
    pub data_type: DataType,
    /// Numeric text as written, unescaped string content, or `TRUE`/`FALSE`.
    pub raw_value: String,
}

impl Literal {
    /// Creates a literal.
    #[must_use]
    pub fn new(data_type: DataType, raw_value: impl Into<String>) -> Self {
        Self {
            data_type,
            raw_value: raw_value.into(),
        }
    }

    /// Creates an integer literal from its text.
    #[must_use]
    pub fn int(raw_value: impl Into<String>) -> Self {
        Self::new(DataType::Int, raw_value)
    }

    /// Creates a decimal literal from its text.
    #[must_use]
    pub fn decimal(raw_value: impl Into<String>) -> Self {
        Self::new(DataType::Decimal, raw_value)
    }

    /// Creates a string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(DataType::String, value)
    }

    /// Creates a boolean literal.
    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Self::new(DataType::Bool, if value { "TRUE" } else { "FALSE" })
    }

    /// Flips the sign of a numeric literal's text.
    #[must_use]
    pub fn negated(self) -> Self {
        let raw_value = match self.raw_value.strip_prefix('-') {
            Some(positive) => positive.to_string(),
            None => format!("-{}", self.raw_value),
        };
        Self {
            data_type: self.data_type,
            raw_value,
        }
    }

    /// Dispatches to [`Visitor::visit_literal`].
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_literal(self)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data_type {
            DataType::String => f.write_str(&quote_string(&self.raw_value)),
            DataType::Int | DataType::Decimal | DataType::Bool => f.write_str(&self.raw_value),
        }
    }
}

/// Quotes a string value so the lexer reads it back unchanged.
#[must_use]
pub fn quote_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        match c {
            '\'' => quoted.push_str("''"),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            '\0' => quoted.push_str("\\0"),
            other => quoted.push(other),
        }
    }
    quoted.push('\'');
    quoted
}

/// A column reference, optionally qualified with a table name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColumnRef {
    /// Table qualifier.
    pub table_name: Option<String>,
    /// Column name, or `*` for the select wildcard.
    pub column_name: String,
}

impl ColumnRef {
    /// Column name used for `SELECT *`.
    pub const WILDCARD: &'static str = "*";

    /// Creates an unqualified column reference.
    #[must_use]
    pub fn new(column_name: impl Into<String>) -> Self {
        Self {
            table_name: None,
            column_name: column_name.into(),
        }
    }

    /// Creates a qualified column reference.
    #[must_use]
    pub fn qualified(table_name: impl Into<String>, column_name: impl Into<String>) -> Self {
        Self {
            table_name: Some(table_name.into()),
            column_name: column_name.into(),
        }
    }

    /// The `*` column reference. The executor expands it.
    #[must_use]
    pub fn wildcard() -> Self {
        Self::new(Self::WILDCARD)
    }

    /// Returns true for the `*` column reference.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.table_name.is_none() && self.column_name == Self::WILDCARD
    }

    /// Dispatches to [`Visitor::visit_column_ref`].
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_column_ref(self)
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table_name {
            Some(table) => write!(f, "{table}.{}", self.column_name),
            None => f.write_str(&self.column_name),
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,

    // Comparison
    Equal,
    NotEqual,
    LessThan,
    LessEqual,
    GreaterThan,
    GreaterEqual,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::LessEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterEqual => ">=",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    /// Returns true for `AND` and `OR`.
    #[must_use]
    pub const fn is_logical(&self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// Returns true for the six comparison operators.
    #[must_use]
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Equal
                | Self::NotEqual
                | Self::LessThan
                | Self::LessEqual
                | Self::GreaterThan
                | Self::GreaterEqual
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A binary expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BinaryExpr {
    /// Operator.
    pub op: BinaryOp,
    /// Left operand.
    pub left: Box<Expr>,
    /// Right operand.
    pub right: Box<Expr>,
}

impl BinaryExpr {
    /// Dispatches to [`Visitor::visit_binary`].
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_binary(self)
    }
}

impl fmt::Display for BinaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryExpr({} {} {})", self.left, self.op, self.right)
    }
}

/// Built-in functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Function {
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Substring.
    Substr,
}

impl Function {
    /// Returns the function name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sin => "SIN",
            Self::Cos => "COS",
            Self::Substr => "SUBSTR",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A function call expression. Arity is not checked by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FunctionCall {
    /// The function.
    pub function: Function,
    /// The arguments.
    pub args: Vec<Expr>,
}

impl FunctionCall {
    /// Creates a function call.
    #[must_use]
    pub const fn new(function: Function, args: Vec<Expr>) -> Self {
        Self { function, args }
    }

    /// Dispatches to [`Visitor::visit_function_call`].
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_function_call(self)
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionCall({}(", self.function)?;
        write_list(f, &self.args)?;
        f.write_str("))")
    }
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),
    /// A column reference.
    Column(ColumnRef),
    /// A binary expression.
    Binary(BinaryExpr),
    /// A function call.
    Function(FunctionCall),
}

impl Expr {
    /// Creates a new column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(ColumnRef::new(name))
    }

    /// Creates a new qualified column reference.
    #[must_use]
    pub fn qualified_column(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Column(ColumnRef::qualified(table, name))
    }

    /// Creates the `*` column reference.
    #[must_use]
    pub fn wildcard() -> Self {
        Self::Column(ColumnRef::wildcard())
    }

    /// Creates a new integer literal.
    #[must_use]
    pub fn int(raw_value: impl Into<String>) -> Self {
        Self::Literal(Literal::int(raw_value))
    }

    /// Creates a new decimal literal.
    #[must_use]
    pub fn decimal(raw_value: impl Into<String>) -> Self {
        Self::Literal(Literal::decimal(raw_value))
    }

    /// Creates a new string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::string(value))
    }

    /// Creates a new boolean literal.
    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Self::Literal(Literal::boolean(value))
    }

    /// Creates a function call.
    #[must_use]
    pub const fn call(function: Function, args: Vec<Self>) -> Self {
        Self::Function(FunctionCall::new(function, args))
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: Self) -> Self {
        Self::Binary(BinaryExpr {
            op,
            left: Box::new(self),
            right: Box::new(right),
        })
    }

    /// Creates an addition.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, right: Self) -> Self {
        self.binary(BinaryOp::Add, right)
    }

    /// Creates a multiplication.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn mul(self, right: Self) -> Self {
        self.binary(BinaryOp::Multiply, right)
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.binary(BinaryOp::Equal, right)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, right: Self) -> Self {
        self.binary(BinaryOp::LessThan, right)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, right: Self) -> Self {
        self.binary(BinaryOp::GreaterThan, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.binary(BinaryOp::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        self.binary(BinaryOp::Or, right)
    }

    /// Returns the binary node if this is a binary expression.
    #[must_use]
    pub const fn as_binary(&self) -> Option<&BinaryExpr> {
        match self {
            Self::Binary(binary) => Some(binary),
            _ => None,
        }
    }

    /// Returns the column reference if this is one.
    #[must_use]
    pub const fn as_column(&self) -> Option<&ColumnRef> {
        match self {
            Self::Column(column) => Some(column),
            _ => None,
        }
    }

    /// Dispatches to the visitor method for this node kind.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Literal(literal) => visitor.visit_literal(literal),
            Self::Column(column) => visitor.visit_column_ref(column),
            Self::Binary(binary) => visitor.visit_binary(binary),
            Self::Function(call) => visitor.visit_function_call(call),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(literal) => literal.fmt(f),
            Self::Column(column) => column.fmt(f),
            Self::Binary(binary) => binary.fmt(f),
            Self::Function(call) => call.fmt(f),
        }
    }
}

/// Writes `items` separated by `", "`.
pub fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item.fmt(f)?;
    }
    Ok(())
}
