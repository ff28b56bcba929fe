//! Fixed keyword tables driving classification.
//!
//! All tables are upper-case and sorted so membership is a binary search.

/// Keywords that introduce a clause and anchor the river column.
pub const ROOT_KEYWORDS: &[&str] = &[
    "AND",
    "BY",
    "FROM",
    "INSERT",
    "JOIN",
    "LIMIT",
    "OFFSET",
    "OR",
    "RETURNING",
    "SELECT",
    "SET",
    "UNION",
    "UPDATE",
    "USING",
    "VALUES",
    "WHERE"
];

/// Keywords that may prefix a root keyword on the same line
/// (`ORDER BY`, `LEFT OUTER JOIN`) and never anchor a river.
pub const ROOT_KEYWORD_DESCRIPTORS: &[&str] =
    &["FOR", "GROUP", "INNER", "LEFT", "ORDER", "OUTER", "RIGHT"];

/// Spellings with a preferred unabbreviated synonym.
pub const ABBREVIATED_KEYWORDS: &[&str] = &["ABS", "CHAR", "CHAR_LENGTH", "DEC", "PROC"];

/// Verbs that open a (sub)statement.
pub const DML_KEYWORDS: &[&str] = &["DELETE", "INSERT", "SELECT", "UPDATE"];

/// Other reserved words treated as keywords. Common column names such as
/// `id`, `name` or `date` are absent.
pub const KEYWORDS: &[&str] = &[
    "ADD",
    "ALL",
    "ALTER",
    "ANY",
    "AS",
    "ASC",
    "BEGIN",
    "BETWEEN",
    "BIGINT",
    "CASE",
    "CHECK",
    "COLUMN",
    "COMMIT",
    "CONFLICT",
    "CONSTRAINT",
    "CREATE",
    "CROSS",
    "CURRENT_DATE",
    "CURRENT_TIME",
    "CURRENT_TIMESTAMP",
    "CURRENT_USER",
    "DECIMAL",
    "DEFAULT",
    "DESC",
    "DISTINCT",
    "DO",
    "DROP",
    "ELSE",
    "END",
    "ESCAPE",
    "EXCEPT",
    "EXISTS",
    "FALSE",
    "FETCH",
    "FILTER",
    "FOREIGN",
    "FULL",
    "GRANT",
    "HAVING",
    "ILIKE",
    "IN",
    "INDEX",
    "INTEGER",
    "INTERSECT",
    "INTERVAL",
    "INTO",
    "IS",
    "LATERAL",
    "LIKE",
    "NATURAL",
    "NOT",
    "NOTHING",
    "NULL",
    "NULLS",
    "NUMERIC",
    "ON",
    "ONLY",
    "OVER",
    "PARTITION",
    "PRIMARY",
    "RECURSIVE",
    "REFERENCES",
    "REVOKE",
    "ROLLBACK",
    "ROWS",
    "SIMILAR",
    "SOME",
    "TABLE",
    "THEN",
    "TRUE",
    "TRUNCATE",
    "UNIQUE",
    "VARCHAR",
    "VIEW",
    "WHEN",
    "WINDOW",
    "WITH"
];

/// Keyword spellings that name a function when a `(` follows.
pub const FUNCTION_KEYWORDS: &[&str] = &[
    "ABS",
    "AVG",
    "CAST",
    "CEIL",
    "CEILING",
    "CHAR",
    "CHARACTER_LENGTH",
    "CHAR_LENGTH",
    "COALESCE",
    "CONVERT",
    "COUNT",
    "EXTRACT",
    "FLOOR",
    "GREATEST",
    "LEAST",
    "LOWER",
    "MAX",
    "MIN",
    "MOD",
    "NULLIF",
    "OCTET_LENGTH",
    "OVERLAY",
    "POSITION",
    "POWER",
    "ROUND",
    "SQRT",
    "SUBSTRING",
    "SUM",
    "TRIM",
    "UPPER"
];

/// Keyword phrases lexed as a single token when their words sit on one line.
///
/// Longer phrases come first so `LEFT OUTER JOIN` wins over `OUTER JOIN`.
pub const KEYWORD_PHRASES: &[&[&str]] = &[
    &["FULL", "OUTER", "JOIN"],
    &["LEFT", "OUTER", "JOIN"],
    &["RIGHT", "OUTER", "JOIN"],
    &["CROSS", "JOIN"],
    &["FULL", "JOIN"],
    &["INNER", "JOIN"],
    &["LEFT", "JOIN"],
    &["NATURAL", "JOIN"],
    &["OUTER", "JOIN"],
    &["RIGHT", "JOIN"],
    &["GROUP", "BY"],
    &["ORDER", "BY"],
    &["INSERT", "INTO"],
    &["UNION", "ALL"]
];

fn contains(table: &[&str], word: &str) -> bool {
    table.binary_search(&word).is_ok()
}

/// Whether an upper-cased word is a root keyword.
pub fn is_root(word: &str) -> bool {
    contains(ROOT_KEYWORDS, word)
}

/// Whether an upper-cased word is a root keyword descriptor.
pub fn is_descriptor(word: &str) -> bool {
    contains(ROOT_KEYWORD_DESCRIPTORS, word)
}

/// Whether an upper-cased word is an abbreviated keyword.
pub fn is_abbreviated(word: &str) -> bool {
    contains(ABBREVIATED_KEYWORDS, word)
}

/// Whether an upper-cased word is a DML verb.
pub fn is_dml(word: &str) -> bool {
    contains(DML_KEYWORDS, word)
}

/// Whether an upper-cased word names a function when called.
pub fn is_function(word: &str) -> bool {
    contains(FUNCTION_KEYWORDS, word)
}

/// Whether an upper-cased word is a keyword at all.
pub fn is_keyword(word: &str) -> bool {
    contains(KEYWORDS, word)
        || is_function(word)
        || is_root(word)
        || is_descriptor(word)
        || is_abbreviated(word)
        || is_dml(word)
}
