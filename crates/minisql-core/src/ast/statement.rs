//! SQL statement AST types.

use core::fmt;

use super::expression::{write_list, Expr};
use super::types::{ColumnDef, TableRef};
use super::visitor::Visitor;

/// A CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CreateTableStatement {
    /// Table name.
    pub table_name: String,
    /// Column definitions, in declaration order.
    pub columns: Vec<ColumnDef>,
    /// Whether `IF NOT EXISTS` was given.
    pub if_not_exists: bool,
}

/// A DROP TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DropTableStatement {
    /// Table name.
    pub table_name: String,
    /// Whether `IF EXISTS` was given.
    pub if_exists: bool,
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InsertStatement {
    /// Table name.
    pub table_name: String,
    /// Target columns. Empty means all columns in table order.
    pub columns: Vec<String>,
    /// One expression list per `VALUES` row.
    pub rows: Vec<Vec<Expr>>,
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectStatement {
    /// The expressions to select. `*` is a single wildcard column reference.
    pub select_list: Vec<Expr>,
    /// The FROM clause.
    pub from_table: Option<TableRef>,
    /// The WHERE clause.
    pub where_clause: Option<Expr>,
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeleteStatement {
    /// The table to delete from.
    pub from_table: TableRef,
    /// The WHERE clause.
    pub where_clause: Option<Expr>,
}

/// The kind of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// `CREATE TABLE`.
    CreateTable,
    /// `DROP TABLE`.
    DropTable,
    /// `INSERT`.
    Insert,
    /// `SELECT`.
    Select,
    /// `DELETE`.
    Delete,
}

impl StatementKind {
    /// Returns the SQL verb of the statement kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreateTable => "CREATE TABLE",
            Self::DropTable => "DROP TABLE",
            Self::Insert => "INSERT",
            Self::Select => "SELECT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A SQL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Statement {
    /// CREATE TABLE statement.
    CreateTable(CreateTableStatement),
    /// DROP TABLE statement.
    DropTable(DropTableStatement),
    /// INSERT statement.
    Insert(InsertStatement),
    /// SELECT statement.
    Select(SelectStatement),
    /// DELETE statement.
    Delete(DeleteStatement),
}

impl Statement {
    /// Returns the kind of this statement.
    #[must_use]
    pub const fn kind(&self) -> StatementKind {
        match self {
            Self::CreateTable(_) => StatementKind::CreateTable,
            Self::DropTable(_) => StatementKind::DropTable,
            Self::Insert(_) => StatementKind::Insert,
            Self::Select(_) => StatementKind::Select,
            Self::Delete(_) => StatementKind::Delete,
        }
    }

    /// Dispatches to the visitor method for this statement kind.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::CreateTable(stmt) => visitor.visit_create_table(stmt),
            Self::DropTable(stmt) => visitor.visit_drop_table(stmt),
            Self::Insert(stmt) => visitor.visit_insert(stmt),
            Self::Select(stmt) => visitor.visit_select(stmt),
            Self::Delete(stmt) => visitor.visit_delete(stmt),
        }
    }
}

macro_rules! impl_accept {
    ($($node:ty => $method:ident),* $(,)?) => {
        $(
            impl $node {
                #[doc = concat!("Dispatches to [`Visitor::", stringify!($method), "`].")]
                pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
                    visitor.$method(self)
                }
            }
        )*
    };
}

impl_accept! {
    CreateTableStatement => visit_create_table,
    DropTableStatement => visit_drop_table,
    InsertStatement => visit_insert,
    SelectStatement => visit_select,
    DeleteStatement => visit_delete,
}

impl fmt::Display for CreateTableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CreateTable({}", self.table_name)?;
        if self.if_not_exists {
            f.write_str(" IF NOT EXISTS")?;
        }
        f.write_str(", [")?;
        write_list(f, &self.columns)?;
        f.write_str("])")
    }
}

impl fmt::Display for DropTableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DropTable({}", self.table_name)?;
        if self.if_exists {
            f.write_str(" IF EXISTS")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Insert({}, [", self.table_name)?;
        write_list(f, &self.columns)?;
        f.write_str("], [")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("(")?;
            write_list(f, row)?;
            f.write_str(")")?;
        }
        f.write_str("])")
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Select([")?;
        write_list(f, &self.select_list)?;
        f.write_str("]")?;
        if let Some(from) = &self.from_table {
            write!(f, ", from: {from}")?;
        }
        if let Some(where_clause) = &self.where_clause {
            write!(f, ", where: {where_clause}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for DeleteStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Delete({}", self.from_table)?;
        if let Some(where_clause) = &self.where_clause {
            write!(f, ", where: {where_clause}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateTable(stmt) => stmt.fmt(f),
            Self::DropTable(stmt) => stmt.fmt(f),
            Self::Insert(stmt) => stmt.fmt(f),
            Self::Select(stmt) => stmt.fmt(f),
            Self::Delete(stmt) => stmt.fmt(f),
        }
    }
}
