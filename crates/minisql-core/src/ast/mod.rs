//! Abstract Syntax Tree (AST) types for SQL statements.

mod expression;
mod sql;
mod statement;
mod types;
mod visitor;

pub use expression::{
    quote_string, BinaryExpr, BinaryOp, ColumnRef, Expr, Function, FunctionCall, Literal,
};
pub use sql::SqlRenderer;
pub use statement::{
    CreateTableStatement, DeleteStatement, DropTableStatement, InsertStatement, SelectStatement,
    Statement, StatementKind,
};
pub use types::{ColumnDef, DataType, TableRef};
pub use visitor::Visitor;
