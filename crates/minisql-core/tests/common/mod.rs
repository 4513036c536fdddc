#![allow(dead_code)]

use minisql_core::ast::{
    CreateTableStatement, DeleteStatement, DropTableStatement, Expr, InsertStatement,
    SelectStatement, Statement,
};
use minisql_core::{ParseError, Parser};

pub fn parse(sql: &str) -> Statement {
    Parser::new(sql)
        .parse_statement()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    Parser::new(sql)
        .parse_statement()
        .expect_err(&format!("Expected parse error for: {sql}"))
}

/// Returns the diagnostic text for input that must fail.
pub fn diagnostic(sql: &str) -> String {
    parse_err(sql).to_string()
}

pub fn parse_create(sql: &str) -> CreateTableStatement {
    match parse(sql) {
        Statement::CreateTable(c) => c,
        other => panic!("Expected CREATE TABLE, got {other:?}"),
    }
}

pub fn parse_drop(sql: &str) -> DropTableStatement {
    match parse(sql) {
        Statement::DropTable(d) => d,
        other => panic!("Expected DROP TABLE, got {other:?}"),
    }
}

pub fn parse_select(sql: &str) -> SelectStatement {
    match parse(sql) {
        Statement::Select(s) => s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn parse_insert(sql: &str) -> InsertStatement {
    match parse(sql) {
        Statement::Insert(i) => i,
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

pub fn parse_delete(sql: &str) -> DeleteStatement {
    match parse(sql) {
        Statement::Delete(d) => d,
        other => panic!("Expected DELETE, got {other:?}"),
    }
}

/// Parses `SELECT <expr>` and returns the single select-list expression.
pub fn parse_expr(expr: &str) -> Expr {
    let mut select = parse_select(&format!("SELECT {expr}"));
    assert_eq!(select.select_list.len(), 1, "expected one expression in: {expr}");
    select.select_list.remove(0)
}

/// Verifies that `to_sql()` re-parses to an equal tree and that the
/// rendered text is a fixed point.
pub fn round_trip(sql: &str) {
    let ast1 = parse(sql);
    let rendered1 = ast1.to_sql();
    let ast2 = parse(&rendered1);
    let rendered2 = ast2.to_sql();
    assert_eq!(
        ast1, ast2,
        "Round-trip changed the tree.\n  Input:    {sql}\n  Rendered: {rendered1}"
    );
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}
