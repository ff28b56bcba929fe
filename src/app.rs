//! Application logic for the SQL Style Checker CLI.
//!
//! This module contains the core application logic separated from the main
//! entry point to enable testing.

mod check;
mod convert;
mod helpers;
mod types;

pub use check::run_check;
pub use convert::convert_format;
pub use helpers::{
    STDIN_SOURCE, build_query, calculate_exit_code, create_output_options, merge_rules_config,
    read_input, source_label
};
pub use types::{CheckParams, CheckResult};
