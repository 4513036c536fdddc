//! Wire formatting of per-statement answers.

use core::fmt;

use minisql_core::ast::Statement;
use minisql_core::{ParseError, Status};
use serde_json::{json, Value};

/// How answers are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `OK`, text tables and `ERROR: <message>` lines.
    #[default]
    Text,
    /// One JSON object per statement.
    Json,
}

/// A row result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given column headers.
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. Missing cells render empty, extra cells are dropped.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(core::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        write_row(f, &self.columns, &widths)?;
        let separator = widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-");
        writeln!(f, "{separator}")?;
        for row in &self.rows {
            write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

/// The answer to one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Success without rows.
    Ok,
    /// A parsed statement.
    Statement(Box<Statement>),
    /// Canonical SQL text.
    Sql(String),
    /// A row result.
    Rows(Table),
    /// A failure.
    Error(Status),
}

impl Response {
    /// Returns true for `Response::Error`.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The status this response carries.
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Self::Error(status) => status.clone(),
            Self::Ok | Self::Statement(_) | Self::Sql(_) | Self::Rows(_) => Status::ok(),
        }
    }

    /// Renders the response as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement cannot be serialized.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        let status = self.status();
        let mut value = json!({ "status": status.code() });
        match self {
            Self::Ok => {}
            Self::Statement(stmt) => value["statement"] = serde_json::to_value(stmt)?,
            Self::Sql(sql) => value["sql"] = json!(sql),
            Self::Rows(table) => {
                value["columns"] = json!(table.columns());
                value["rows"] = json!(table.rows());
            }
            Self::Error(status) => value["message"] = json!(status.message()),
        }
        Ok(value)
    }

    /// Renders the response in the requested format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => Ok(self.to_json()?.to_string()),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("OK"),
            Self::Statement(stmt) => stmt.fmt(f),
            Self::Sql(sql) => f.write_str(sql),
            Self::Rows(table) => write!(f, "{}", table.to_string().trim_end()),
            Self::Error(status) => write!(f, "ERROR: {}", status.message()),
        }
    }
}

impl From<Status> for Response {
    fn from(status: Status) -> Self {
        if status.is_ok() {
            Self::Ok
        } else {
            Self::Error(status)
        }
    }
}

impl From<ParseError> for Response {
    fn from(err: ParseError) -> Self {
        Self::Error(Status::from(err))
    }
}
