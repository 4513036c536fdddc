//! minisql CLI
//!
//! Parses SQL statements and answers in the request-layer wire format.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use minisql_cli::{handle, read_statements, Action, OutputFormat};

/// Front-end for the minisql SQL dialect.
#[derive(Parser)]
#[command(name = "minisql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format.
    #[arg(
        long,
        value_enum,
        env = "MINISQL_FORMAT",
        default_value_t = OutputFormat::Text,
        global = true
    )]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Where the SQL comes from.
#[derive(Args)]
struct Input {
    /// A single SQL statement. Reads standard input when neither this nor
    /// `--file` is given.
    sql: Option<String>,

    /// Read statements from a file. Each statement ends with `;` and may
    /// span several lines.
    #[arg(short, long, conflicts_with = "sql")]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse statements and answer OK or the diagnostic.
    Check(Input),

    /// Print the parsed tree of each statement.
    Parse(Input),

    /// Print each statement as canonical SQL.
    Sql(Input),

    /// Print the token stream of each statement.
    Tokens(Input),
}

impl Commands {
    fn split(self) -> (Action, Input) {
        match self {
            Self::Check(input) => (Action::Check, input),
            Self::Parse(input) => (Action::Parse, input),
            Self::Sql(input) => (Action::Sql, input),
            Self::Tokens(input) => (Action::Tokens, input),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let (action, input) = cli.command.split();
    let statements = read_statements(input.sql, input.file.as_deref())?;
    if statements.is_empty() {
        info!("No statements given.");
        return Ok(ExitCode::SUCCESS);
    }

    let mut failures = 0usize;
    for sql in &statements {
        let response = handle(action, sql);
        if response.is_error() {
            failures += 1;
        }
        println!("{}", response.render(cli.format)?);
    }

    debug!(total = statements.len(), failures, "done");
    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
