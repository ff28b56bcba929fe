use std::fmt::Write;

use colored::Colorize;

use crate::{
    error::{AppResult, output_error},
    rules::{Diagnostic, LintReport, Severity}
};

/// Output format for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true
        }
    }
}

/// Format a lint report based on output options
pub fn format_report(report: &LintReport, opts: &OutputOptions) -> AppResult<String> {
    match opts.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).map_err(|e| output_error("JSON", e))
        }
        OutputFormat::Yaml => serde_yaml::to_string(report).map_err(|e| output_error("YAML", e)),
        OutputFormat::Text => Ok(format_text(report, opts.colored))
    }
}

/// One line per diagnostic, then a summary line.
fn format_text(report: &LintReport, colored: bool) -> String {
    let mut out = String::new();
    for diagnostic in &report.diagnostics {
        let _ = writeln!(out, "{}", format_diagnostic(diagnostic, colored));
    }
    let summary = format!(
        "{} queries checked, {} skipped: {} errors, {} warnings, {} info",
        report.queries_count,
        report.skipped_count,
        report.error_count(),
        report.warning_count(),
        report.info_count()
    );
    if colored {
        let _ = writeln!(out, "{}", summary.bold());
    } else {
        let _ = writeln!(out, "{}", summary);
    }
    out
}

/// `source:line:column: CODE message`, the source omitted when unknown.
pub fn format_diagnostic(diagnostic: &Diagnostic, colored: bool) -> String {
    let location = match &diagnostic.source {
        Some(source) => format!("{}:{}:{}", source, diagnostic.line, diagnostic.column),
        None => format!("{}:{}", diagnostic.line, diagnostic.column)
    };
    let text = diagnostic
        .message
        .strip_prefix(diagnostic.code)
        .map_or(diagnostic.message.as_str(), str::trim_start);
    let code = if colored {
        match diagnostic.severity {
            Severity::Error => diagnostic.code.red().bold().to_string(),
            Severity::Warning => diagnostic.code.yellow().to_string(),
            Severity::Info => diagnostic.code.blue().to_string()
        }
    } else {
        diagnostic.code.to_string()
    };
    format!("{}: {} {}", location, code, text)
}
