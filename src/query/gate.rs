use std::sync::LazyLock;

use regex::Regex;

static SQL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)(select\s.*from\s|delete\s+from\s|insert\s+into\s.*values\s|update\s.*set\s)"
    )
    .unwrap_or_else(|err| panic!("invalid SQL gate pattern: {err}"))
});

/// Whether a string literal looks like SQL worth checking.
///
/// Matches `select … from`, `delete from`, `insert into … values` and
/// `update … set`, case-insensitively and across lines.
///
/// # Example
///
/// ```
/// use sql_style_checker::query::looks_like_sql;
///
/// assert!(looks_like_sql("select a\n  from b"));
/// assert!(!looks_like_sql("selected items from the list"));
/// ```
pub fn looks_like_sql(text: &str) -> bool {
    SQL_PATTERN.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_shapes() {
        assert!(looks_like_sql("SELECT a FROM b"));
        assert!(looks_like_sql("DELETE  FROM b"));
        assert!(looks_like_sql("INSERT INTO t (a)\nVALUES (1)"));
        assert!(looks_like_sql("update t set a = 1"));
    }

    #[test]
    fn test_prose_is_rejected() {
        assert!(!looks_like_sql("Please select an option"));
        assert!(!looks_like_sql("update"));
        assert!(!looks_like_sql(""));
    }
}
