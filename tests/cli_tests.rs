// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use clap::Parser;
use sql_style_checker::cli::{Cli, Commands, Format};

#[test]
fn test_parse_check_defaults() {
    let cli = Cli::try_parse_from(["sql-style-checker", "check", "query.sql"]).unwrap();
    let Commands::Check {
        paths,
        excepted_names,
        disable,
        output_format,
        all,
        no_color
    } = cli.command;

    assert_eq!(paths.len(), 1);
    assert!(excepted_names.is_empty());
    assert!(disable.is_empty());
    assert!(matches!(output_format, Format::Text));
    assert!(!all);
    assert!(!no_color);
}

#[test]
fn test_parse_check_lists() {
    let cli = Cli::try_parse_from([
        "sql-style-checker",
        "check",
        "--excepted-names",
        "value,name",
        "--disable",
        "Q449",
        "-f",
        "json",
        "--all",
        "--no-color",
        "a.sql",
        "b.sql"
    ])
    .unwrap();
    let Commands::Check {
        paths,
        excepted_names,
        disable,
        output_format,
        all,
        no_color
    } = cli.command;

    assert_eq!(paths.len(), 2);
    assert_eq!(excepted_names, vec!["value", "name"]);
    assert_eq!(disable, vec!["Q449"]);
    assert!(matches!(output_format, Format::Json));
    assert!(all);
    assert!(no_color);
}

#[test]
fn test_parse_requires_paths() {
    assert!(Cli::try_parse_from(["sql-style-checker", "check"]).is_err());
}

#[test]
fn test_format_variants() {
    let _text = Format::Text;
    let _json = Format::Json;
    let _yaml = Format::Yaml;
}
