//! # SQL Style Checker
//!
//! Checks the layout of SQL kept in host-language string literals: keyword
//! casing, identifier naming, operator whitespace and river alignment.
//!
//! ```bash
//! sql-style-checker check query.sql
//! cat query.sql | sql-style-checker check - -f json
//! sql-style-checker check --excepted-names value --disable Q449 *.sql
//! ```
//!
//! # Exit Codes
//!
//! - `0` - Success, no issues or only informational messages
//! - `1` - Warnings found, or a fatal error
//! - `2` - Errors found
//!
//! Set `RUST_LOG=debug` for diagnostics on stderr.

use std::{io, process};

use clap::Parser;
use sql_style_checker::{
    app::{CheckParams, run_check},
    cli::{Cli, Commands},
    config::Config,
    error::AppResult
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        )
        .init();

    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> AppResult<i32> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Check {
            paths,
            excepted_names,
            disable,
            output_format,
            all,
            no_color
        } => {
            let params = CheckParams {
                paths: paths
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect(),
                excepted_names,
                disable,
                output_format,
                all,
                no_color
            };
            let result = run_check(params, config)?;
            print!("{}", result.output);
            Ok(result.exit_code)
        }
    }
}
