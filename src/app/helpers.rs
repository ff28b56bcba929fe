//! Helper functions for CLI operations.
//!
//! Reading input, turning it into queries, merging CLI flags into the
//! configuration and deriving the exit code.

use std::{
    fs::read_to_string,
    io::{self, Read}
};

use super::convert::convert_format;
use crate::{
    cli::Format,
    config::RulesConfig,
    error::{AppResult, file_read_error},
    output::OutputOptions,
    query::Query,
    rules::{LintReport, Severity}
};

/// Label used for input read from stdin.
pub const STDIN_SOURCE: &str = "<stdin>";

/// Calculates the process exit code based on diagnostic severities.
///
/// - `0` - No diagnostics or only informational messages
/// - `1` - At least one warning present
/// - `2` - At least one error present
///
/// # Example
///
/// ```
/// use sql_style_checker::{app::calculate_exit_code, rules::LintReport};
///
/// let report = LintReport::new(1, 4);
/// assert_eq!(calculate_exit_code(&report), 0);
/// ```
pub fn calculate_exit_code(report: &LintReport) -> i32 {
    if report
        .diagnostics
        .iter()
        .any(|d| d.severity == Severity::Error)
    {
        2
    } else if report
        .diagnostics
        .iter()
        .any(|d| d.severity == Severity::Warning)
    {
        1
    } else {
        0
    }
}

/// Read one input from a file or from stdin when `path` is "-".
pub fn read_input(path: &str) -> AppResult<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| file_read_error("stdin", e))?;
        Ok(buffer)
    } else {
        read_to_string(path).map_err(|e| file_read_error(path, e))
    }
}

/// Turn the content of one input into a query.
///
/// The content is one literal: a single trailing line break is dropped and
/// diagnostics are anchored at its last line, column 0.
///
/// # Example
///
/// ```
/// use sql_style_checker::app::build_query;
///
/// let query = build_query("SELECT abc\n  FROM xyz\n", "q.sql");
///
/// assert_eq!(query.sql, "SELECT abc\n  FROM xyz");
/// assert_eq!((query.line, query.column), (2, 0));
/// assert_eq!(query.source.as_deref(), Some("q.sql"));
/// ```
pub fn build_query(content: &str, source: &str) -> Query {
    let sql = content
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(content);
    let line = sql.lines().count().max(1);
    Query::new(sql, line, 0).with_source(source)
}

/// Source label for an input path.
pub fn source_label(path: &str) -> &str {
    if path == "-" { STDIN_SOURCE } else { path }
}

/// Create output options from parameters
pub fn create_output_options(format: Format, no_color: bool) -> OutputOptions {
    OutputOptions {
        format:  convert_format(format),
        colored: !no_color
    }
}

/// Add CLI-provided names and disabled codes to the configuration
pub fn merge_rules_config(
    mut config: RulesConfig,
    excepted_names: &[String],
    disable: &[String]
) -> RulesConfig {
    config
        .excepted_names
        .extend(excepted_names.iter().map(|name| name.trim().to_string()));
    config
        .disabled
        .extend(disable.iter().map(|code| code.trim().to_string()));
    config
}
