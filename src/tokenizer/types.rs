use serde::Serialize;

/// Semantic category of a token, fixed at tokenization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Clause-introducing keyword that anchors a river (`SELECT`, `FROM`)
    RootKeyword,
    /// Keyword prefixing a root keyword (`LEFT`, `ORDER`)
    DescriptorKeyword,
    /// Keyword with a preferred long-form synonym (`DEC`, `PROC`)
    AbbreviatedKeyword,
    /// Any other keyword
    Keyword,
    /// Keyword spelling used as the identifier of a function call
    FunctionName,
    /// Identifier that is not a keyword
    PlainName,
    Punctuation,
    Comparison,
    /// Spaces and tabs
    Whitespace,
    Newline,
    /// Literals, operators, comments and quoted identifiers
    Other
}

/// A positioned, depth-tagged slice of the checked SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub value:    &'a str,
    /// Line within the literal, 0-based
    pub row:      usize,
    /// Character column within the line, shifted by the initial offset on
    /// row 0
    pub col:      usize,
    /// Subquery nesting level
    pub depth:    usize,
    pub category: Category
}

impl Token<'_> {
    /// Length of the value in characters.
    pub fn width(&self) -> usize {
        self.value.chars().count()
    }

    /// Column just past the last character.
    pub fn right_edge(&self) -> usize {
        self.col + self.width()
    }

    /// First column a token governed by this one may start at.
    pub fn river_column(&self) -> usize {
        self.right_edge() + 1
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self.category,
            Category::RootKeyword
                | Category::DescriptorKeyword
                | Category::AbbreviatedKeyword
                | Category::Keyword
        )
    }

    pub fn is_root_keyword(&self) -> bool {
        self.category == Category::RootKeyword
    }

    pub fn is_descriptor(&self) -> bool {
        self.category == Category::DescriptorKeyword
    }

    pub fn is_function_name(&self) -> bool {
        self.category == Category::FunctionName
    }

    pub fn is_name(&self) -> bool {
        self.category == Category::PlainName
    }

    pub fn is_punctuation(&self) -> bool {
        self.category == Category::Punctuation
    }

    pub fn is_comparison(&self) -> bool {
        self.category == Category::Comparison
    }

    /// Spaces, tabs and line breaks.
    pub fn is_whitespace(&self) -> bool {
        matches!(self.category, Category::Whitespace | Category::Newline)
    }

    pub fn is_newline(&self) -> bool {
        self.category == Category::Newline
    }

    /// Whether this is the `;` statement terminator.
    pub fn is_terminator(&self) -> bool {
        self.is_punctuation() && self.value == ";"
    }
}
