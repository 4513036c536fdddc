//! Renders an AST back into canonical SQL text.
//!
//! Keywords are uppercase, every binary expression is wrapped in
//! parentheses, and string literals are re-escaped, so the output parses
//! back into an equal tree.

use super::expression::{quote_string, BinaryExpr, ColumnRef, Expr, FunctionCall, Literal};
use super::statement::{
    CreateTableStatement, DeleteStatement, DropTableStatement, InsertStatement, SelectStatement,
    Statement,
};
use super::types::{ColumnDef, DataType, TableRef};
use super::visitor::Visitor;

/// Visitor producing canonical SQL for each node.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlRenderer;

impl SqlRenderer {
    /// Creates a renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn join(&mut self, exprs: &[Expr]) -> String {
        exprs
            .iter()
            .map(|expr| expr.accept(self))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn where_suffix(&mut self, where_clause: Option<&Expr>) -> String {
        where_clause.map_or_else(String::new, |expr| format!(" WHERE {}", expr.accept(self)))
    }
}

impl Visitor for SqlRenderer {
    type Output = String;

    fn visit_create_table(&mut self, stmt: &CreateTableStatement) -> String {
        let columns = stmt
            .columns
            .iter()
            .map(|column| column.accept(self))
            .collect::<Vec<_>>()
            .join(", ");
        let if_not_exists = if stmt.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };
        format!("CREATE TABLE {if_not_exists}{} ({columns})", stmt.table_name)
    }

    fn visit_drop_table(&mut self, stmt: &DropTableStatement) -> String {
        let if_exists = if stmt.if_exists { "IF EXISTS " } else { "" };
        format!("DROP TABLE {if_exists}{}", stmt.table_name)
    }

    fn visit_insert(&mut self, stmt: &InsertStatement) -> String {
        let mut sql = format!("INSERT INTO {}", stmt.table_name);
        if !stmt.columns.is_empty() {
            sql.push_str(" (");
            sql.push_str(&stmt.columns.join(", "));
            sql.push(')');
        }
        let rows = stmt
            .rows
            .iter()
            .map(|row| format!("({})", self.join(row)))
            .collect::<Vec<_>>()
            .join(", ");
        sql.push_str(" VALUES ");
        sql.push_str(&rows);
        sql
    }

    fn visit_select(&mut self, stmt: &SelectStatement) -> String {
        let mut sql = format!("SELECT {}", self.join(&stmt.select_list));
        if let Some(table) = &stmt.from_table {
            sql.push_str(" FROM ");
            sql.push_str(&table.accept(self));
        }
        sql.push_str(&self.where_suffix(stmt.where_clause.as_ref()));
        sql
    }

    fn visit_delete(&mut self, stmt: &DeleteStatement) -> String {
        let table = stmt.from_table.accept(self);
        let where_clause = self.where_suffix(stmt.where_clause.as_ref());
        format!("DELETE FROM {table}{where_clause}")
    }

    fn visit_literal(&mut self, literal: &Literal) -> String {
        match literal.data_type {
            DataType::String => quote_string(&literal.raw_value),
            DataType::Int | DataType::Decimal | DataType::Bool => literal.raw_value.clone(),
        }
    }

    fn visit_column_ref(&mut self, column: &ColumnRef) -> String {
        column.to_string()
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> String {
        let left = expr.left.accept(self);
        let right = expr.right.accept(self);
        format!("({left} {} {right})", expr.op)
    }

    fn visit_function_call(&mut self, call: &FunctionCall) -> String {
        format!("{}({})", call.function, self.join(&call.args))
    }

    fn visit_column_def(&mut self, column: &ColumnDef) -> String {
        format!("{} {}", column.column_name, column.data_type)
    }

    fn visit_table_ref(&mut self, table: &TableRef) -> String {
        table.table_name.clone()
    }
}

impl Statement {
    /// Renders the statement as canonical SQL.
    #[must_use]
    pub fn to_sql(&self) -> String {
        self.accept(&mut SqlRenderer)
    }
}

impl Expr {
    /// Renders the expression as canonical SQL.
    #[must_use]
    pub fn to_sql(&self) -> String {
        self.accept(&mut SqlRenderer)
    }
}
