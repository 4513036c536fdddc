//! SQL data types and the auxiliary nodes used by statements.

use core::fmt;

use super::visitor::Visitor;

/// Column and literal data types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum DataType {
    /// Integer.
    Int,
    /// Character string.
    String,
    /// Boolean.
    Bool,
    /// Fixed-point decimal.
    Decimal,
}

impl DataType {
    /// Returns the SQL name of the data type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::String => "STRING",
            Self::Bool => "BOOL",
            Self::Decimal => "DECIMAL",
        }
    }

    /// Returns true for `INT` and `DECIMAL`.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Decimal)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A column definition for CREATE TABLE.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColumnDef {
    /// Column name.
    pub column_name: String,
    /// Data type.
    pub data_type: DataType,
}

impl ColumnDef {
    /// Creates a new column definition.
    #[must_use]
    pub fn new(column_name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            column_name: column_name.into(),
            data_type,
        }
    }

    /// Dispatches to [`Visitor::visit_column_def`].
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_column_def(self)
    }
}

impl fmt::Display for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column_name, self.data_type)
    }
}

/// A table reference in FROM clause.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableRef {
    /// Table name.
    pub table_name: String,
}

impl TableRef {
    /// Creates a table reference.
    #[must_use]
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }

    /// Dispatches to [`Visitor::visit_table_ref`].
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_table_ref(self)
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.table_name)
    }
}
