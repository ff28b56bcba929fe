//! Category assignment for lexemes.

use super::{lex::LexKind, types::Category};
use crate::keywords;

/// Structural facts about a lexeme's position in the statement.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Context {
    /// Directly inside the argument list of a function call
    pub in_call:        bool,
    /// Followed by `(`, possibly after spaces
    pub next_is_lparen: bool,
    /// Immediately preceded by `.`, as in `tbl.column`
    pub after_period:   bool
}

/// Derive the category of a lexeme with text `text`.
pub(crate) fn classify(text: &str, kind: LexKind, context: Context) -> Category {
    match kind {
        LexKind::Word {
            quoted: true
        } => Category::Other,
        LexKind::Word {
            quoted: false
        } => classify_word(text, context),
        LexKind::Space => Category::Whitespace,
        LexKind::Newline => Category::Newline,
        LexKind::Comma
        | LexKind::Semicolon
        | LexKind::LParen
        | LexKind::RParen
        | LexKind::Punctuation => Category::Punctuation,
        LexKind::Comparison => Category::Comparison,
        LexKind::Comment | LexKind::Other => Category::Other
    }
}

fn classify_word(text: &str, context: Context) -> Category {
    if context.after_period {
        return Category::PlainName;
    }
    let upper = text.to_uppercase();
    let keyword = is_keyword_word(&upper);
    if context.next_is_lparen && names_call(&upper) {
        return if keyword {
            Category::FunctionName
        } else {
            Category::PlainName
        };
    }
    if !keyword {
        return Category::PlainName;
    }
    if is_root_word(&upper) && !context.in_call {
        Category::RootKeyword
    } else if keywords::is_descriptor(&upper) {
        Category::DescriptorKeyword
    } else if keywords::is_abbreviated(&upper) {
        Category::AbbreviatedKeyword
    } else {
        Category::Keyword
    }
}

/// Whether every word of an upper-cased word or phrase is a keyword.
fn is_keyword_word(upper: &str) -> bool {
    let mut words = upper.split_whitespace().peekable();
    words.peek().is_some() && words.all(keywords::is_keyword)
}

/// Whether an upper-cased word or phrase contains a root keyword.
pub(crate) fn is_root_word(upper: &str) -> bool {
    upper.split_whitespace().any(keywords::is_root)
}

/// Whether a word followed by `(` names a function being called.
///
/// Root keywords, DML verbs and plain keywords such as `ON` or `IN` only
/// open a parenthesised group.
pub(crate) fn names_call(upper: &str) -> bool {
    if is_root_word(upper) || is_dml_word(upper) {
        return false;
    }
    !is_keyword_word(upper) || keywords::is_function(upper)
}

/// Whether a word or phrase starts with a DML verb.
pub(crate) fn is_dml_word(upper: &str) -> bool {
    upper.split_whitespace().next().is_some_and(keywords::is_dml)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORD: LexKind = LexKind::Word {
        quoted: false
    };

    fn at_top(text: &str) -> Category {
        classify(text, WORD, Context::default())
    }

    #[test]
    fn test_root_keywords() {
        assert_eq!(at_top("select"), Category::RootKeyword);
        assert_eq!(at_top("LEFT OUTER JOIN"), Category::RootKeyword);
        assert_eq!(at_top("ORDER BY"), Category::RootKeyword);
        assert_eq!(at_top("INSERT INTO"), Category::RootKeyword);
    }

    #[test]
    fn test_root_keyword_inside_call_is_plain_keyword() {
        let context = Context {
            in_call: true,
            ..Context::default()
        };
        assert_eq!(classify("FROM", WORD, context), Category::Keyword);
    }

    #[test]
    fn test_descriptors_and_abbreviations() {
        assert_eq!(at_top("LEFT"), Category::DescriptorKeyword);
        assert_eq!(at_top("dec"), Category::AbbreviatedKeyword);
        assert_eq!(at_top("PROC"), Category::AbbreviatedKeyword);
        assert_eq!(at_top("INTO"), Category::Keyword);
    }

    #[test]
    fn test_column_names_are_names() {
        assert_eq!(at_top("id"), Category::PlainName);
        assert_eq!(at_top("name"), Category::PlainName);
        assert_eq!(at_top("value"), Category::PlainName);
    }

    #[test]
    fn test_word_after_period_is_name() {
        let context = Context {
            after_period: true,
            ..Context::default()
        };
        assert_eq!(classify("select", WORD, context), Category::PlainName);
        assert_eq!(classify("count", WORD, context), Category::PlainName);
    }

    #[test]
    fn test_function_names() {
        let context = Context {
            next_is_lparen: true,
            ..Context::default()
        };
        assert_eq!(classify("char_length", WORD, context), Category::FunctionName);
        assert_eq!(classify("my_func", WORD, context), Category::PlainName);
        assert_eq!(classify("SELECT", WORD, context), Category::RootKeyword);
        assert_eq!(classify("IN", WORD, context), Category::Keyword);
        assert_eq!(classify("ON", WORD, context), Category::Keyword);
    }

    #[test]
    fn test_other_kinds() {
        let quoted = LexKind::Word {
            quoted: true
        };
        let top = Context::default();
        assert_eq!(classify("\"Quoted\"", quoted, top), Category::Other);
        assert_eq!(classify(" ", LexKind::Space, top), Category::Whitespace);
        assert_eq!(classify("\n", LexKind::Newline, top), Category::Newline);
        assert_eq!(classify(";", LexKind::Semicolon, top), Category::Punctuation);
        assert_eq!(classify("<>", LexKind::Comparison, top), Category::Comparison);
        assert_eq!(classify("-- c\n", LexKind::Comment, top), Category::Other);
    }

    #[test]
    fn test_call_openers() {
        assert!(names_call("EXTRACT"));
        assert!(names_call("MY_FUNC"));
        assert!(!names_call("IN"));
        assert!(!names_call("ON"));
        assert!(!names_call("EXISTS"));
        assert!(!names_call("VALUES"));
        assert!(!names_call("DELETE"));
        assert!(is_dml_word("INSERT INTO"));
    }
}
