//! # SQL Style Checker
//!
//! Style checks for SQL embedded in string literals.
//!
//! Each literal is tokenized once into [`tokenizer::Token`]s carrying their
//! row, column, nesting depth and category. Four rules read the tokens:
//!
//! | Rule | Codes | Checks |
//! |------|-------|--------|
//! | casing | Q440, Q442 | keywords uppercase and unabbreviated |
//! | naming | Q441 | identifiers snake_case |
//! | whitespace | Q443, Q444, Q446 | commas, comparisons, terminators |
//! | alignment | Q445, Q447, Q448, Q449 | river layout of multi-line queries |
//!
//! Every diagnostic is anchored at the position of its literal.
//!
//! ```
//! use sql_style_checker::{
//!     query::Query,
//!     rules::{ExceptedNames, RuleRunner}
//! };
//!
//! let query = Query::new("SELECT abc,\ndef\n  FROM xyz", 3, 4);
//! let report = RuleRunner::new().analyze(&[query], &ExceptedNames::default());
//!
//! assert_eq!(report.codes(), vec!["Q449"]);
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Position, depth and category of every token
//! - [`keywords`] - Keyword tables
//! - [`rules`] - Rule engine and built-in rules
//! - [`query`] - Literals, the SQL gate and interpolation placeholders
//! - [`config`] - Configuration loading
//! - [`output`] - Report formatting
//! - [`app`] - CLI application logic
//! - [`error`] - Error types and constructors

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod keywords;
pub mod output;
pub mod query;
pub mod rules;
pub mod tokenizer;
