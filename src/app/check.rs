//! The check command.

use tracing::debug;

use super::{
    helpers::{
        build_query, calculate_exit_code, create_output_options, merge_rules_config, read_input,
        source_label
    },
    types::{CheckParams, CheckResult}
};
use crate::{
    config::Config,
    error::{AppResult, no_input_error},
    output::format_report,
    query::looks_like_sql,
    rules::RuleRunner
};

/// Run the check command
///
/// Every input is read before any is checked; a read failure aborts the
/// whole run. Inputs that do not look like SQL are skipped unless
/// `params.all` is set.
pub fn run_check(params: CheckParams, config: Config) -> AppResult<CheckResult> {
    if params.paths.is_empty() {
        return Err(no_input_error());
    }
    let mut queries = Vec::with_capacity(params.paths.len());
    let mut skipped = 0;
    for path in &params.paths {
        let content = read_input(path)?;
        let source = source_label(path);
        if !params.all && !looks_like_sql(&content) {
            debug!(source, "skipping input that does not look like SQL");
            skipped += 1;
            continue;
        }
        queries.push(build_query(&content, source));
    }
    let rules_config = merge_rules_config(config.rules, &params.excepted_names, &params.disable);
    let excepted_names = rules_config.excepted_names();
    let runner = RuleRunner::with_config(rules_config);
    let mut report = runner.analyze(&queries, &excepted_names);
    report.skipped_count = skipped;
    let output_opts = create_output_options(params.output_format, params.no_color);
    let output = format_report(&report, &output_opts)?;
    Ok(CheckResult {
        exit_code: calculate_exit_code(&report),
        output
    })
}
