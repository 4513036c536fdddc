//! Double-dispatch visitor over the closed set of AST node kinds.
//!
//! Every node has an `accept` method that calls the one visitor method for
//! its concrete kind. `Statement::accept` and `Expr::accept` pick the method
//! with an exhaustive `match`, so adding a node kind is a compile error in
//! every visitor until it is handled.
//!
//! Visitors decide themselves whether and how to descend into children:
//!
//! ```rust
//! use minisql_core::ast::{
//!     BinaryExpr, ColumnDef, ColumnRef, CreateTableStatement, DeleteStatement,
//!     DropTableStatement, FunctionCall, InsertStatement, Literal, SelectStatement,
//!     TableRef, Visitor,
//! };
//!
//! /// Counts column references in a statement.
//! struct ColumnCounter;
//!
//! impl Visitor for ColumnCounter {
//!     type Output = usize;
//!
//!     /// Visits a `CREATE TABLE` statement.
//!     fn visit_create_table(&mut self, _: &CreateTableStatement) -> usize { 0 }
//!     /// Visits a `DROP TABLE` statement.
//!     fn visit_drop_table(&mut self, _: &DropTableStatement) -> usize { 0 }
//!     /// Visits an `INSERT` statement.
//!     fn visit_insert(&mut self, stmt: &InsertStatement) -> usize {
//!         stmt.rows.iter().flatten().map(|e| e.accept(self)).sum()
//!     }
//!     /// Visits a `SELECT` statement.
//!     fn visit_select(&mut self, stmt: &SelectStatement) -> usize {
//!         let list: usize = stmt.select_list.iter().map(|e| e.accept(self)).sum();
//!         list + stmt.where_clause.as_ref().map_or(0, |e| e.accept(self))
//!     }
//!     /// Visits a `DELETE` statement.
//!     fn visit_delete(&mut self, stmt: &DeleteStatement) -> usize {
//!         stmt.where_clause.as_ref().map_or(0, |e| e.accept(self))
//!     }
//!     /// Visits a literal value.
//!     fn visit_literal(&mut self, _: &Literal) -> usize { 0 }
//!     /// Visits a column reference, including `*` and `table.*`.
//!     fn visit_column_ref(&mut self, _: &ColumnRef) -> usize { 1 }
//!     /// Visits a binary expression. Operands are not visited automatically.
//!     fn visit_binary(&mut self, expr: &BinaryExpr) -> usize {
//!         expr.left.accept(self) + expr.right.accept(self)
//!     }
//!     /// Visits a built-in function call.
//!     fn visit_function_call(&mut self, call: &FunctionCall) -> usize {
//!         call.args.iter().map(|e| e.accept(self)).sum()
//!     }
//!     /// Visits a column definition of `CREATE TABLE`.
//!     fn visit_column_def(&mut self, _: &ColumnDef) -> usize { 0 }
//!     /// Visits a table reference.
//!     fn visit_table_ref(&mut self, _: &TableRef) -> usize { 0 }
//! }
//!
//! let stmt = minisql_core::parse("SELECT a, b + 1 FROM t WHERE c > 2").unwrap();
//! assert_eq!(stmt.accept(&mut ColumnCounter), 3);
//! ```

use super::expression::{BinaryExpr, ColumnRef, FunctionCall, Literal};
use super::statement::{
    CreateTableStatement, DeleteStatement, DropTableStatement, InsertStatement, SelectStatement,
};
use super::types::{ColumnDef, TableRef};

/// One method per concrete AST node kind.
pub trait Visitor {
    /// Value produced by each visit.
    type Output;

    fn visit_create_table(&mut self, stmt: &CreateTableStatement) -> Self::Output;
    fn visit_drop_table(&mut self, stmt: &DropTableStatement) -> Self::Output;
    fn visit_insert(&mut self, stmt: &InsertStatement) -> Self::Output;
    fn visit_select(&mut self, stmt: &SelectStatement) -> Self::Output;
    fn visit_delete(&mut self, stmt: &DeleteStatement) -> Self::Output;

    fn visit_literal(&mut self, literal: &Literal) -> Self::Output;
    fn visit_column_ref(&mut self, column: &ColumnRef) -> Self::Output;
    fn visit_binary(&mut self, expr: &BinaryExpr) -> Self::Output;
    fn visit_function_call(&mut self, call: &FunctionCall) -> Self::Output;

    fn visit_column_def(&mut self, column: &ColumnDef) -> Self::Output;
    fn visit_table_ref(&mut self, table: &TableRef) -> Self::Output;
}
