//! Application types for CLI commands.
//!
//! Command parameters and results passed between the CLI entry point and
//! the testable application logic.

use crate::cli::Format;

/// Parameters for the check command.
///
/// # Example
///
/// ```
/// use sql_style_checker::{app::CheckParams, cli::Format};
///
/// let params = CheckParams {
///     paths:          vec!["query.sql".to_string()],
///     excepted_names: vec![],
///     disable:        vec!["Q449".to_string()],
///     output_format:  Format::Text,
///     all:            false,
///     no_color:       true
/// };
/// assert_eq!(params.paths.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CheckParams {
    /// Input files, "-" for stdin.
    pub paths:          Vec<String>,
    /// Keywords exempt from the uppercase check, on top of configuration.
    pub excepted_names: Vec<String>,
    /// Codes to disable, on top of configuration.
    pub disable:        Vec<String>,
    /// Output format for results.
    pub output_format:  Format,
    /// Check inputs that do not look like SQL too.
    pub all:            bool,
    /// Disable colored terminal output.
    pub no_color:       bool
}

/// Result of a check run.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Exit code based on diagnostic severity (0, 1, or 2).
    pub exit_code: i32,
    /// Formatted report.
    pub output:    String
}
