//! Tests for INSERT statements.

mod common;
use common::*;

use minisql_core::ast::{BinaryOp, Expr};
use minisql_core::parser::ParseErrorKind;

#[test]
fn insert_without_columns() {
    let i = parse_insert("INSERT INTO users VALUES (1, 'Alice')");
    assert_eq!(i.table_name, "USERS");
    assert!(i.columns.is_empty());
    assert_eq!(i.rows, vec![vec![Expr::int("1"), Expr::string("Alice")]]);
}

#[test]
fn insert_with_columns() {
    let i = parse_insert("insert into users (id, name) values (1, 'a');");
    assert_eq!(i.columns, vec!["ID", "NAME"]);
    assert_eq!(i.rows.len(), 1);
}

#[test]
fn insert_multiple_rows() {
    let i = parse_insert("INSERT INTO t VALUES (1, TRUE), (2, FALSE), (3, TRUE)");
    assert_eq!(i.rows.len(), 3);
    assert_eq!(i.rows[1], vec![Expr::int("2"), Expr::boolean(false)]);
}

#[test]
fn insert_expressions() {
    let i = parse_insert("INSERT INTO t (a, b) VALUES (1 + 2, -3)");
    assert!(matches!(
        i.rows[0][0].as_binary(),
        Some(b) if b.op == BinaryOp::Add
    ));
    assert_eq!(i.rows[0][1], Expr::int("-3"));
}

#[test]
fn insert_round_trip() {
    round_trip("INSERT INTO t VALUES (1, 'it''s', 2.5, TRUE)");
    round_trip("INSERT INTO t (a, b) VALUES (1, 2), (SIN(0), -4)");
}

#[test]
fn insert_empty_column_list() {
    let err = parse_err("INSERT INTO t () VALUES (1)");
    assert_eq!(err.kind, ParseErrorKind::Empty);
    assert_eq!(err.message, "column list must not be empty");
}

#[test]
fn insert_empty_row() {
    let err = parse_err("INSERT INTO t VALUES ()");
    assert_eq!(err.kind, ParseErrorKind::Empty);
    assert_eq!(err.message, "VALUES row must not be empty");
}

#[test]
fn insert_missing_values() {
    assert_eq!(
        parse_err("INSERT INTO t (a)").message,
        "expected VALUES, found end of input"
    );
}

#[test]
fn insert_missing_into() {
    assert_eq!(
        parse_err("INSERT t VALUES (1)").message,
        "expected INTO, found identifier 'T'"
    );
}

#[test]
fn insert_unclosed_row() {
    assert_eq!(
        parse_err("INSERT INTO t VALUES (1, 2").message,
        "expected ')', found end of input"
    );
}

#[test]
fn insert_two_rows_of_two() {
    let i = parse_insert("INSERT INTO t VALUES (1,'a'),(2,'b');");
    assert_eq!(i.rows.len(), 2);
    assert!(i.rows.iter().all(|row| row.len() == 2));
    assert_eq!(i.rows[1][1], Expr::string("b"));
}
