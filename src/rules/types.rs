//! Type definitions for the style rule system.
//!
//! - [`Severity`] - Diagnostic severity levels (Info, Warning, Error)
//! - [`Diagnostic`] - A single finding, anchored at its literal
//! - [`RuleInfo`] - Rule identity and the codes it emits
//! - [`ExceptedNames`] - Names exempt from the uppercase keyword check
//! - [`LintReport`] - Complete results for a batch of queries

use compact_str::CompactString;
use indexmap::IndexSet;
use serde::Serialize;

use crate::{query::Query, tokenizer::Token};

/// Stable diagnostic codes.
pub mod codes {
    pub const KEYWORD_NOT_UPPERCASE: &str = "Q440";
    pub const INVALID_NAME: &str = "Q441";
    pub const ABBREVIATED_KEYWORD: &str = "Q442";
    pub const COMMA_WHITESPACE: &str = "Q443";
    pub const COMPARISON_WHITESPACE: &str = "Q444";
    pub const MISSING_LINE_BREAK: &str = "Q445";
    pub const TERMINATOR_NEWLINE: &str = "Q446";
    pub const ROOT_NOT_ALIGNED: &str = "Q447";
    pub const SUBQUERY_NOT_INDENTED: &str = "Q448";
    pub const TOKEN_LEFT_OF_RIVER: &str = "Q449";

    /// Every code, in order.
    pub const ALL: &[&str] = &[
        KEYWORD_NOT_UPPERCASE,
        INVALID_NAME,
        ABBREVIATED_KEYWORD,
        COMMA_WHITESPACE,
        COMPARISON_WHITESPACE,
        MISSING_LINE_BREAK,
        TERMINATOR_NEWLINE,
        ROOT_NOT_ALIGNED,
        SUBQUERY_NOT_INDENTED,
        TOKEN_LEFT_OF_RIVER
    ];
}

/// Severity level of a diagnostic.
///
/// Ordered from lowest to highest for sorting. The exit code of the CLI is
/// determined by the highest severity found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    /// Informational, does not affect exit code
    Info,
    /// Style violation (exit code 1)
    Warning,
    /// Style violation promoted by configuration (exit code 2)
    Error
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR")
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            other => Err(format!("unknown severity '{}'", other))
        }
    }
}

/// A single style finding.
///
/// `line` and `column` are the anchor of the literal, never the position of
/// the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line:        usize,
    pub column:      usize,
    /// Stable code, e.g. "Q447"
    pub code:        &'static str,
    /// Human-readable message, starting with the code
    pub message:     String,
    /// Identity of the rule that produced this diagnostic
    pub rule:        &'static str,
    pub severity:    Severity,
    /// Zero-based index of the query in the checked batch
    pub query_index: usize,
    /// File or stream the query came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source:      Option<String>
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

/// Metadata about a rule for identification and configuration.
#[derive(Debug, Clone)]
pub struct RuleInfo {
    /// Rule identity (e.g., "alignment")
    pub id:       &'static str,
    /// Human-readable rule name
    pub name:     &'static str,
    /// Codes this rule may emit
    pub codes:    &'static [&'static str],
    /// Default severity level
    pub severity: Severity
}

/// Names exempt from the uppercase keyword check, compared
/// case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptedNames {
    names: IndexSet<CompactString>
}

impl ExceptedNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        Self {
            names: names
                .into_iter()
                .map(|name| CompactString::from(name.as_ref().trim().to_uppercase()))
                .filter(|name| !name.is_empty())
                .collect()
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.names.contains(word.to_uppercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Everything a rule sees of one query.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'q, 'a> {
    pub query:          &'q Query,
    pub query_index:    usize,
    pub tokens:         &'q [Token<'a>],
    pub excepted_names: &'q ExceptedNames
}

impl CheckContext<'_, '_> {
    /// Build a diagnostic anchored at this query.
    pub fn diagnostic(&self, info: &RuleInfo, code: &'static str, message: String) -> Diagnostic {
        Diagnostic {
            line: self.query.line,
            column: self.query.column,
            code,
            message: format!("{} {}", code, message),
            rule: info.id,
            severity: info.severity,
            query_index: self.query_index,
            source: self.query.source.clone()
        }
    }
}

/// Complete report for a batch of queries.
///
/// Use [`error_count`](Self::error_count),
/// [`warning_count`](Self::warning_count), and [`info_count`](Self::info_count)
/// to get counts by severity.
#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    /// All diagnostics found
    pub diagnostics:   Vec<Diagnostic>,
    /// Number of queries checked
    pub queries_count: usize,
    /// Number of inputs that did not look like SQL and were skipped
    pub skipped_count: usize,
    /// Number of rules executed
    pub rules_count:   usize
}

impl LintReport {
    pub fn new(queries_count: usize, rules_count: usize) -> Self {
        Self {
            diagnostics: Vec::new(),
            queries_count,
            skipped_count: 0,
            rules_count
        }
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }

    /// Distinct codes present, in ascending order.
    pub fn codes(&self) -> Vec<&'static str> {
        let mut codes: Vec<_> = self.diagnostics.iter().map(|d| d.code).collect();
        codes.sort_unstable();
        codes.dedup();
        codes
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}
