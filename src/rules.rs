//! Style rule engine for embedded SQL.
//!
//! Each query is tokenized once; every enabled rule then reads the same
//! token slice. Rules are implemented as types that implement the [`Rule`]
//! trait.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  Queries    │────▶│  Tokenizer  │────▶│  RuleRunner  │────▶│   Report    │
//! └─────────────┘     └─────────────┘     └──────────────┘     └─────────────┘
//!                                                │
//!                                         ┌──────┴──────┐
//!                                         │   Rules     │
//!                                         │  (parallel) │
//!                                         └─────────────┘
//! ```
//!
//! The [`RuleRunner`] executes all enabled rules in parallel using [`rayon`],
//! collecting diagnostics into a [`LintReport`].
//!
//! # Rules
//!
//! | Rule | Codes |
//! |------|-------|
//! | casing | `Q440` keyword not uppercase, `Q442` abbreviated keyword |
//! | naming | `Q441` identifier not snake_case |
//! | whitespace | `Q443` comma, `Q444` comparison, `Q446` terminator |
//! | alignment | `Q445`, `Q447`, `Q448`, `Q449` river layout |
//!
//! # Configuration
//!
//! Codes can be disabled or have their severity modified via [`RulesConfig`]:
//!
//! ```toml
//! [rules]
//! disabled = ["Q449"]
//! excepted_names = ["name", "value"]
//!
//! [rules.severity]
//! Q440 = "error"
//! ```

mod alignment;
mod casing;
mod naming;
mod types;
mod whitespace;

use std::collections::HashMap;

use compact_str::CompactString;
use indexmap::IndexSet;
use rayon::prelude::*;
use tracing::debug;
pub use types::{
    CheckContext, Diagnostic, ExceptedNames, LintReport, RuleInfo, Severity, codes
};

pub use self::{
    alignment::AlignmentRule, casing::CasingRule, naming::NamingRule, whitespace::WhitespaceRule
};
use crate::{config::RulesConfig, query::Query, tokenizer::Tokenizer};

/// Trait for implementing style rules.
///
/// Rules are stateless between calls: all state lives inside one
/// [`check`](Rule::check). They must be `Send + Sync` for parallel execution.
///
/// # Example
///
/// ```
/// use sql_style_checker::rules::{CheckContext, Diagnostic, Rule, RuleInfo, Severity};
///
/// struct NoTabs;
///
/// impl Rule for NoTabs {
///     fn info(&self) -> RuleInfo {
///         RuleInfo {
///             id:       "tabs",
///             name:     "No tabs",
///             codes:    &["X001"],
///             severity: Severity::Info
///         }
///     }
///
///     fn check(&self, ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
///         let info = self.info();
///         ctx.tokens
///             .iter()
///             .filter(|t| t.value.contains('\t'))
///             .map(|_| ctx.diagnostic(&info, "X001", "tab character".to_string()))
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns metadata about this rule.
    fn info(&self) -> RuleInfo;

    /// Checks one tokenized query.
    ///
    /// # Returns
    ///
    /// A vector of diagnostics, empty if the query passes this rule.
    fn check(&self, ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic>;
}

/// Parallel rule execution engine.
///
/// # Example
///
/// ```
/// use sql_style_checker::{
///     query::Query,
///     rules::{ExceptedNames, RuleRunner}
/// };
///
/// let runner = RuleRunner::new();
/// let query = Query::new("select abc from xyz", 1, 0);
/// let diagnostics = runner.check_query(&query, 0, &ExceptedNames::default());
///
/// assert!(diagnostics.iter().all(|d| d.code == "Q440"));
/// assert_eq!(diagnostics.len(), 2);
/// ```
pub struct RuleRunner {
    rules:          Vec<Box<dyn Rule>>,
    disabled:       IndexSet<CompactString>,
    severity_cache: HashMap<&'static str, Severity>
}

impl Default for RuleRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleRunner {
    /// Create a new runner with all rules and every code enabled
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Create a new runner with configuration
    ///
    /// # Notes
    ///
    /// - A rule is dropped when all of its codes are disabled
    /// - Unknown severities in the configuration are ignored
    pub fn with_config(config: RulesConfig) -> Self {
        let disabled: IndexSet<CompactString> = config
            .disabled
            .iter()
            .map(|code| CompactString::from(code.trim().to_uppercase()))
            .collect();
        let all_rules: Vec<Box<dyn Rule>> = vec![
            Box::new(CasingRule),
            Box::new(NamingRule),
            Box::new(WhitespaceRule),
            Box::new(AlignmentRule),
        ];
        let rules: Vec<Box<dyn Rule>> = all_rules
            .into_iter()
            .filter(|rule| {
                !rule
                    .info()
                    .codes
                    .iter()
                    .all(|code| disabled.contains(*code))
            })
            .collect();
        let mut severity_cache = HashMap::new();
        for code in codes::ALL {
            if let Some(sev_str) = config.severity.get(*code)
                && let Ok(severity) = sev_str.parse::<Severity>()
            {
                severity_cache.insert(*code, severity);
            }
        }
        Self {
            rules,
            disabled,
            severity_cache
        }
    }

    /// Number of active rules.
    pub fn rules_count(&self) -> usize {
        self.rules.len()
    }

    /// Tokenize one query and run every rule over it.
    ///
    /// `excepted_names` is passed per call so no configuration is shared
    /// between unrelated checks.
    pub fn check_query(
        &self,
        query: &Query,
        query_index: usize,
        excepted_names: &ExceptedNames
    ) -> Vec<Diagnostic> {
        let tokenizer = Tokenizer::new(&query.sql, query.initial_offset);
        let tokens: Vec<_> = tokenizer.tokens().collect();
        let ctx = CheckContext {
            query,
            query_index,
            tokens: &tokens,
            excepted_names
        };
        self.rules
            .par_iter()
            .flat_map(|rule| rule.check(&ctx))
            .filter(|diagnostic| !self.disabled.contains(diagnostic.code))
            .map(|mut diagnostic| {
                if let Some(&severity) = self.severity_cache.get(diagnostic.code) {
                    diagnostic.severity = severity;
                }
                diagnostic
            })
            .collect()
    }

    /// Run all rules on the provided queries (parallel execution)
    pub fn analyze(&self, queries: &[Query], excepted_names: &ExceptedNames) -> LintReport {
        debug!(
            queries = queries.len(),
            rules = self.rules.len(),
            "running style rules"
        );
        let mut report = LintReport::new(queries.len(), self.rules.len());
        let diagnostics: Vec<Diagnostic> = queries
            .par_iter()
            .enumerate()
            .flat_map(|(idx, query)| self.check_query(query, idx, excepted_names))
            .collect();
        for diagnostic in diagnostics {
            report.add_diagnostic(diagnostic);
        }
        report.diagnostics.sort_by(|a, b| {
            a.query_index
                .cmp(&b.query_index)
                .then_with(|| a.code.cmp(b.code))
        });
        report
    }
}

/// Check one query with every rule and default configuration.
///
/// # Example
///
/// ```
/// use sql_style_checker::{
///     query::Query,
///     rules::{ExceptedNames, check}
/// };
///
/// let query = Query::new("SELECT tableColumn FROM tbl", 3, 8);
/// let diagnostics = check(&query, &ExceptedNames::default());
///
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(diagnostics[0].code, "Q441");
/// assert_eq!((diagnostics[0].line, diagnostics[0].column), (3, 8));
/// ```
pub fn check(query: &Query, excepted_names: &ExceptedNames) -> Vec<Diagnostic> {
    RuleRunner::new().check_query(query, 0, excepted_names)
}
