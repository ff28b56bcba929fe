//! Lexing through `sqlparser`, reduced to the lexeme kinds the checker needs.
//!
//! Lexeme text is always the source slice between one token's start and the
//! next token's start, so the lexemes cover the input without gaps.

use std::ops::Range;

use smallvec::SmallVec;
use sqlparser::{
    dialect::GenericDialect,
    tokenizer::{Location, Token, TokenWithSpan, Tokenizer, Whitespace}
};
use tracing::debug;

use crate::keywords::KEYWORD_PHRASES;

/// Lexical kind of a source slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LexKind {
    Word { quoted: bool },
    Space,
    Newline,
    Comment,
    Comma,
    Semicolon,
    LParen,
    RParen,
    Punctuation,
    Comparison,
    Other
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Lexeme {
    pub range: Range<usize>,
    pub kind:  LexKind
}

impl Lexeme {
    pub fn text<'a>(&self, sql: &'a str) -> &'a str {
        &sql[self.range.clone()]
    }

    pub fn is_unquoted_word(&self) -> bool {
        matches!(
            self.kind,
            LexKind::Word {
                quoted: false
            }
        )
    }
}

/// Split `sql` into lexemes. Never fails: text the SQL tokenizer rejects is
/// degraded to one lexeme per line.
pub(crate) fn lex(sql: &str) -> Vec<Lexeme> {
    if sql.is_empty() {
        return Vec::new();
    }
    let dialect = GenericDialect {};
    let tokens = match Tokenizer::new(&dialect, sql).tokenize_with_location() {
        Ok(tokens) => tokens,
        Err(err) => {
            debug!(error = %err, "sql tokenizer rejected input, lexing by line");
            return lex_lines(sql);
        }
    };
    match slice_tokens(sql, &tokens) {
        Some(lexemes) => merge_phrases(sql, lexemes),
        None => {
            debug!("token locations do not cover input, lexing by line");
            lex_lines(sql)
        }
    }
}

fn kind_of(token: &Token) -> LexKind {
    match token {
        Token::Word(word) => LexKind::Word {
            quoted: word.quote_style.is_some()
        },
        Token::Whitespace(Whitespace::Newline) => LexKind::Newline,
        Token::Whitespace(Whitespace::Space | Whitespace::Tab) => LexKind::Space,
        Token::Whitespace(_) => LexKind::Comment,
        Token::Comma => LexKind::Comma,
        Token::SemiColon => LexKind::Semicolon,
        Token::LParen => LexKind::LParen,
        Token::RParen => LexKind::RParen,
        Token::Period
        | Token::Colon
        | Token::DoubleColon
        | Token::LBracket
        | Token::RBracket => LexKind::Punctuation,
        Token::Eq
        | Token::DoubleEq
        | Token::Neq
        | Token::Lt
        | Token::Gt
        | Token::LtEq
        | Token::GtEq
        | Token::Spaceship => LexKind::Comparison,
        _ => LexKind::Other
    }
}

/// Byte offsets of line starts, for turning 1-based line/column locations
/// into byte offsets.
struct LineIndex {
    starts: Vec<usize>
}

impl LineIndex {
    fn new(sql: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(sql.match_indices('\n').map(|(i, _)| i + 1));
        Self {
            starts
        }
    }

    fn offset(&self, sql: &str, location: Location) -> Option<usize> {
        let line = usize::try_from(location.line).ok()?.checked_sub(1)?;
        let column = usize::try_from(location.column).ok()?.checked_sub(1)?;
        let start = *self.starts.get(line)?;
        let rest = &sql[start..];
        match rest.char_indices().nth(column) {
            Some((i, _)) => Some(start + i),
            None if column == rest.chars().count() => Some(sql.len()),
            None => None
        }
    }
}

fn slice_tokens(sql: &str, tokens: &[TokenWithSpan]) -> Option<Vec<Lexeme>> {
    let index = LineIndex::new(sql);
    let mut starts = Vec::with_capacity(tokens.len());
    for token in tokens.iter().filter(|t| t.token != Token::EOF) {
        let start = index.offset(sql, token.span.start)?;
        starts.push((start, kind_of(&token.token)));
    }
    if starts.first().is_none_or(|(start, _)| *start != 0) {
        return None;
    }
    let mut lexemes = Vec::with_capacity(starts.len());
    for (i, (start, kind)) in starts.iter().enumerate() {
        let end = starts.get(i + 1).map_or(sql.len(), |(next, _)| *next);
        if end <= *start {
            return None;
        }
        lexemes.push(Lexeme {
            range: *start..end,
            kind:  *kind
        });
    }
    Some(lexemes)
}

fn lex_lines(sql: &str) -> Vec<Lexeme> {
    let mut lexemes = Vec::new();
    let mut start = 0;
    for line in sql.split_inclusive('\n') {
        let end = start + line.len();
        let body_end = if line.ends_with('\n') { end - 1 } else { end };
        if body_end > start {
            lexemes.push(Lexeme {
                range: start..body_end,
                kind:  LexKind::Other
            });
        }
        if body_end < end {
            lexemes.push(Lexeme {
                range: body_end..end,
                kind:  LexKind::Newline
            });
        }
        start = end;
    }
    lexemes
}

/// Fold keyword phrases such as `LEFT OUTER JOIN` into a single word lexeme.
fn merge_phrases(sql: &str, lexemes: Vec<Lexeme>) -> Vec<Lexeme> {
    let mut merged = Vec::with_capacity(lexemes.len());
    let mut i = 0;
    while i < lexemes.len() {
        match phrase_end(sql, &lexemes, i) {
            Some(end) => {
                merged.push(Lexeme {
                    range: lexemes[i].range.start..lexemes[end].range.end,
                    kind:  LexKind::Word {
                        quoted: false
                    }
                });
                i = end + 1;
            }
            None => {
                merged.push(lexemes[i].clone());
                i += 1;
            }
        }
    }
    merged
}

/// Index of the last lexeme of the longest phrase starting at `start`.
fn phrase_end(sql: &str, lexemes: &[Lexeme], start: usize) -> Option<usize> {
    if !lexemes[start].is_unquoted_word() {
        return None;
    }
    // (upper-cased word, lexeme index) of the words following on this line
    let mut words: SmallVec<[(String, usize); 3]> = SmallVec::new();
    words.push((lexemes[start].text(sql).to_uppercase(), start));
    let mut j = start + 1;
    while words.len() < 3 {
        let gap = j;
        while lexemes.get(j).is_some_and(|l| l.kind == LexKind::Space) {
            j += 1;
        }
        match lexemes.get(j) {
            Some(lexeme) if j > gap && lexeme.is_unquoted_word() => {
                words.push((lexeme.text(sql).to_uppercase(), j));
                j += 1;
            }
            _ => break
        }
    }
    KEYWORD_PHRASES.iter().find_map(|phrase| {
        let matches = phrase.len() <= words.len()
            && phrase
                .iter()
                .zip(words.iter())
                .all(|(expected, (word, _))| word == expected);
        matches.then(|| words[phrase.len() - 1].1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sql: &str) -> Vec<&str> {
        lex(sql).iter().map(|l| l.text(sql)).collect()
    }

    #[test]
    fn test_lexemes_cover_input() {
        let sql = "SELECT abc, def\n  FROM xyz -- note\nWHERE a >= 'x y'";
        assert_eq!(texts(sql).concat(), sql);
    }

    #[test]
    fn test_empty_input() {
        assert!(lex("").is_empty());
    }

    #[test]
    fn test_merges_join_phrase() {
        let sql = "a LEFT  OUTER JOIN b";
        assert_eq!(texts(sql), vec!["a", " ", "LEFT  OUTER JOIN", " ", "b"]);
    }

    #[test]
    fn test_merges_case_insensitively() {
        let sql = "order by x";
        assert_eq!(texts(sql)[0], "order by");
    }

    #[test]
    fn test_phrase_does_not_span_lines() {
        let sql = "ORDER\nBY x";
        assert_eq!(texts(sql)[0], "ORDER");
    }

    #[test]
    fn test_quoted_word_is_not_merged() {
        let sql = "GROUP \"BY\"";
        assert_eq!(texts(sql)[0], "GROUP");
    }

    #[test]
    fn test_unterminated_quote_degrades_to_lines() {
        let sql = "SELECT 'abc\nFROM xyz";
        let lexemes = lex(sql);
        assert_eq!(texts(sql).concat(), sql);
        assert!(lexemes.iter().any(|l| l.kind == LexKind::Newline));
    }

    #[test]
    fn test_kinds() {
        let sql = "a = b, c;";
        let kinds: Vec<LexKind> = lex(sql).into_iter().map(|l| l.kind).collect();
        assert!(kinds.contains(&LexKind::Comparison));
        assert!(kinds.contains(&LexKind::Comma));
        assert_eq!(kinds.last(), Some(&LexKind::Semicolon));
    }

    #[test]
    fn test_multibyte_text() {
        let sql = "SELECT 'héllo' AS ñame\nFROM t";
        assert_eq!(texts(sql).concat(), sql);
    }
}
