//! Tests for CREATE TABLE and DROP TABLE.

mod common;
use common::*;

use minisql_core::ast::{ColumnDef, DataType};
use minisql_core::parser::ParseErrorKind;

// ===================================================================
// CREATE TABLE
// ===================================================================

#[test]
fn create_table_basic() {
    let c = parse_create("CREATE TABLE users (id INT, name STRING, active BOOL, price DECIMAL)");
    assert_eq!(c.table_name, "USERS");
    assert!(!c.if_not_exists);
    assert_eq!(
        c.columns,
        vec![
            ColumnDef::new("ID", DataType::Int),
            ColumnDef::new("NAME", DataType::String),
            ColumnDef::new("ACTIVE", DataType::Bool),
            ColumnDef::new("PRICE", DataType::Decimal),
        ]
    );
}

#[test]
fn create_table_if_not_exists() {
    let c = parse_create("create table if not exists t (a int);");
    assert!(c.if_not_exists);
    assert_eq!(c.table_name, "T");
}

#[test]
fn create_table_type_synonyms() {
    let c = parse_create(
        "CREATE TABLE t (a INTEGER, b TEXT, c VARCHAR(255), d BOOLEAN, \
         e DECIMAL(10, 2), f DECIMAL(8), g DOUBLE, h FLOAT)",
    );
    let types: Vec<DataType> = c.columns.iter().map(|col| col.data_type).collect();
    assert_eq!(
        types,
        vec![
            DataType::Int,
            DataType::String,
            DataType::String,
            DataType::Bool,
            DataType::Decimal,
            DataType::Decimal,
            DataType::Decimal,
            DataType::Decimal,
        ]
    );
}

#[test]
fn create_table_round_trip() {
    round_trip("CREATE TABLE t (a INT, b VARCHAR(10), c DECIMAL(4, 1))");
    round_trip("CREATE TABLE IF NOT EXISTS t (flag BOOLEAN)");
}

#[test]
fn create_table_empty_columns() {
    let err = parse_err("CREATE TABLE t ()");
    assert_eq!(err.kind, ParseErrorKind::Empty);
    assert_eq!(
        err.to_string(),
        "Parse error at line 1, column 17: column definition list must not be empty"
    );
}

#[test]
fn create_table_missing_name() {
    assert_eq!(
        diagnostic("CREATE TABLE;"),
        "Parse error at line 1, column 13: expected table name, found ';'"
    );
}

#[test]
fn create_table_if_without_not() {
    assert_eq!(
        diagnostic("CREATE TABLE IF EXISTS t (a INT)"),
        "Parse error at line 1, column 17: expected NOT, found EXISTS"
    );
}

#[test]
fn create_table_unknown_type() {
    let err = parse_err("CREATE TABLE t (a BLOB)");
    assert_eq!(err.kind, ParseErrorKind::Syntax);
    assert_eq!(err.message, "expected data type, found identifier 'BLOB'");
}

#[test]
fn create_table_too_many_type_arguments() {
    let err = parse_err("CREATE TABLE t (a VARCHAR(1, 2))");
    assert_eq!(err.message, "expected ')', found ','");
}

#[test]
fn create_table_missing_type() {
    assert_eq!(
        diagnostic("CREATE TABLE t (a, b INT)"),
        "Parse error at line 1, column 18: expected data type, found ','"
    );
}

#[test]
fn create_table_trailing_comma() {
    assert_eq!(
        parse_err("CREATE TABLE t (a INT,)").message,
        "expected column name, found ')'"
    );
}

#[test]
fn create_table_type_name_as_column() {
    let err = parse_err("CREATE TABLE notes (text STRING)");
    assert_eq!(err.kind, ParseErrorKind::Syntax);
    assert_eq!(err.message, "expected column name, found TEXT");
    assert_eq!(err.position.column, 21);
}

// ===================================================================
// DROP TABLE
// ===================================================================

#[test]
fn drop_table_basic() {
    let d = parse_drop("DROP TABLE users");
    assert_eq!(d.table_name, "USERS");
    assert!(!d.if_exists);
}

#[test]
fn drop_table_if_exists() {
    let d = parse_drop("drop table if exists users;");
    assert!(d.if_exists);
    round_trip("DROP TABLE IF EXISTS users");
}

#[test]
fn drop_table_missing_table_keyword() {
    assert_eq!(
        diagnostic("DROP users"),
        "Parse error at line 1, column 6: expected TABLE, found identifier 'USERS'"
    );
}
