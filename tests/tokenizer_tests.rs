// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use sql_style_checker::tokenizer::{Category, Token, Tokenizer};

fn tokens(sql: &str, offset: usize) -> Vec<Token<'_>> {
    Tokenizer::new(sql, offset).tokens().collect()
}

fn find<'a>(tokens: &'a [Token<'a>], value: &str) -> &'a Token<'a> {
    tokens.iter().find(|t| t.value == value).unwrap()
}

#[test]
fn test_round_trip() {
    let inputs = [
        "SELECT abc, def\n  FROM xyz\n WHERE abc >= 1;",
        "select 'it''s' as abc -- trailing\nfrom xyz",
        "INSERT INTO xyz (clm1, clm2)\n     VALUES (abc, def)\n  RETURNING clm1",
        "SELECT 'unterminated\n  FROM xyz",
        "SELECT \"Quoted Name\" FROM xyz /* block\ncomment */ WHERE abc <> 2",
        ""
    ];
    for sql in inputs {
        let joined: String = tokens(sql, 0).iter().map(|t| t.value).collect();
        assert_eq!(joined, sql);
    }
}

#[test]
fn test_deterministic() {
    let sql = "SELECT abc\n  FROM xyz\n WHERE def IN (SELECT ghi\n                 FROM jkl)";
    let first: Vec<(usize, usize, usize)> =
        tokens(sql, 4).iter().map(|t| (t.row, t.col, t.depth)).collect();
    let second: Vec<(usize, usize, usize)> =
        tokens(sql, 4).iter().map(|t| (t.row, t.col, t.depth)).collect();
    assert_eq!(first, second);
}

#[test]
fn test_categories() {
    let found = tokens("SELECT abc FROM xyz", 0);
    let categories: Vec<Category> = found.iter().map(|t| t.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::RootKeyword,
            Category::Whitespace,
            Category::PlainName,
            Category::Whitespace,
            Category::RootKeyword,
            Category::Whitespace,
            Category::PlainName
        ]
    );
}

#[test]
fn test_initial_offset_applies_to_first_row() {
    let found = tokens("SELECT abc\n  FROM xyz", 11);
    assert_eq!((found[0].row, found[0].col), (0, 11));
    assert_eq!(find(&found, "abc").col, 18);
    let from = find(&found, "FROM");
    assert_eq!((from.row, from.col), (1, 2));
}

#[test]
fn test_keyword_phrases_are_single_tokens() {
    let found = tokens("SELECT abc\n  FROM xyz\n  LEFT OUTER JOIN ijk\n ORDER BY abc", 0);
    let join = find(&found, "LEFT OUTER JOIN");
    assert_eq!(join.category, Category::RootKeyword);
    assert_eq!(join.right_edge(), 17);
    assert_eq!(find(&found, "ORDER BY").category, Category::RootKeyword);
}

#[test]
fn test_descriptor_on_its_own_line() {
    let found = tokens("SELECT abc\n  FROM xyz\n  LEFT\n  JOIN ijk", 0);
    assert_eq!(find(&found, "LEFT").category, Category::DescriptorKeyword);
    assert_eq!(find(&found, "JOIN").category, Category::RootKeyword);
}

#[test]
fn test_function_names() {
    let found = tokens("SELECT ABS(abc), my_func(def) FROM xyz", 0);
    assert_eq!(find(&found, "ABS").category, Category::FunctionName);
    assert_eq!(find(&found, "my_func").category, Category::PlainName);
}

#[test]
fn test_punctuation_and_comparison() {
    let found = tokens("SELECT abc, def FROM xyz WHERE abc <= def;", 0);
    assert_eq!(find(&found, ",").category, Category::Punctuation);
    assert_eq!(find(&found, "<=").category, Category::Comparison);
    assert!(find(&found, ";").is_terminator());
}

#[test]
fn test_newline_tokens() {
    let found = tokens("SELECT abc\nFROM xyz", 0);
    let newline = find(&found, "\n");
    assert!(newline.is_newline());
    assert!(newline.is_whitespace());
    assert_eq!(newline.row, 0);
}

#[test]
fn test_block_comment_spanning_lines() {
    let found = tokens("SELECT abc /* one\ntwo */ FROM xyz", 0);
    let from = find(&found, "FROM");
    assert_eq!((from.row, from.col), (1, 7));
}

#[test]
fn test_columns_count_characters() {
    let found = tokens("SELECT 'é' AS abc", 0);
    assert_eq!(find(&found, "AS").col, 11);
}

#[test]
fn test_len() {
    let tokenizer = Tokenizer::new("SELECT abc", 0);
    assert_eq!(tokenizer.len(), 3);
    assert_eq!(tokenizer.tokens().len(), 3);
    assert!(Tokenizer::new("", 0).is_empty());
}

#[test]
fn test_column_names_are_not_keywords() {
    let found = tokens("SELECT id, name\n  FROM xyz\n WHERE xyz.value = 1", 0);
    for value in ["id", "name", "value"] {
        assert_eq!(find(&found, value).category, Category::PlainName, "{}", value);
    }
}

#[test]
fn test_spaced_function_call() {
    let found = tokens("SELECT EXTRACT (abc FROM xyz.def)\n  FROM xyz", 0);
    assert_eq!(find(&found, "EXTRACT").category, Category::FunctionName);
    let froms: Vec<_> = found.iter().filter(|t| t.value == "FROM").collect();
    assert_eq!(froms[0].category, Category::Keyword);
    assert_eq!(froms[1].category, Category::RootKeyword);
}
