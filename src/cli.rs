use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// SQL Style Checker - Check the layout of SQL embedded in string literals
#[derive(Parser, Debug)]
#[command(name = "sql-style-checker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check SQL files, one literal per file (use - for stdin)
    Check {
        /// Files holding one SQL literal each
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Keywords exempt from the uppercase check, comma separated
        #[arg(long, value_delimiter = ',')]
        excepted_names: Vec<String>,

        /// Codes to disable, comma separated
        #[arg(long, value_delimiter = ',')]
        disable: Vec<String>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        output_format: Format,

        /// Check every input, even text that does not look like SQL
        #[arg(long)]
        all: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
