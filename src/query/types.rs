use serde::Serialize;

/// SQL text of one host-language string literal and the position all of its
/// diagnostics are reported at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    /// The literal's text
    pub sql:            String,
    /// 1-based source line of the literal's last physical line
    pub line:           usize,
    /// Source column of the literal
    pub column:         usize,
    /// Column of the first logical line in the physical source
    pub initial_offset: usize,
    /// File path or other label of the source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source:         Option<String>
}

impl Query {
    pub fn new(sql: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            sql: sql.into(),
            line,
            column,
            initial_offset: 0,
            source: None
        }
    }

    #[must_use]
    pub fn with_initial_offset(mut self, initial_offset: usize) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Build a query from a literal whose last physical line is `end_line`
    /// (1-based) in `physical_lines`, locating the true column of its first
    /// logical line.
    ///
    /// Falls back to an offset of 0 when the first line cannot be found.
    ///
    /// # Example
    ///
    /// ```
    /// use sql_style_checker::query::Query;
    ///
    /// let source = ["query = \"\"\"SELECT a", "             FROM b\"\"\""];
    /// let query = Query::from_source("SELECT a\n             FROM b", 2, 8, &source);
    ///
    /// assert_eq!(query.initial_offset, 11);
    /// ```
    pub fn from_source(
        sql: impl Into<String>,
        end_line: usize,
        column: usize,
        physical_lines: &[&str]
    ) -> Self {
        let query = Self::new(sql, end_line, column);
        let offset = initial_offset(&query.sql, end_line, physical_lines).unwrap_or(0);
        query.with_initial_offset(offset)
    }

    /// Number of logical lines in the literal.
    pub fn line_count(&self) -> usize {
        self.sql.lines().count()
    }

    /// Whether the literal spans more than one line; only those are checked
    /// for alignment.
    pub fn is_multiline(&self) -> bool {
        self.line_count() > 1
    }
}

fn initial_offset(sql: &str, end_line: usize, physical_lines: &[&str]) -> Option<usize> {
    let first = sql.lines().next()?;
    let index = end_line.checked_sub(sql.lines().count())?;
    let line = physical_lines.get(index)?;
    let byte = line.find(first)?;
    Some(line[..byte].chars().count())
}
