//! SQL tokenizer producing positioned, depth-tagged tokens.
//!
//! Lexing is delegated to [`sqlparser`]. The flat token list is then walked
//! once with a stack of parenthesis frames to recover subquery nesting: a DML
//! verb (`SELECT`, `INSERT`, `UPDATE`, `DELETE`) inside parentheses raises the
//! depth of everything after it in that group. Nesting never comes from
//! indentation, which is what the alignment rule checks.
//!
//! # Example
//!
//! ```
//! use sql_style_checker::tokenizer::{Category, Tokenizer};
//!
//! let tokenizer = Tokenizer::new("SELECT a\n  FROM (SELECT b FROM c)", 4);
//! let tokens: Vec<_> = tokenizer.tokens().collect();
//!
//! assert_eq!(tokens[0].col, 4);
//! assert_eq!(tokens[0].category, Category::RootKeyword);
//! assert_eq!(tokens.iter().map(|t| t.value).collect::<String>(), tokenizer.sql());
//! assert_eq!(tokens.iter().map(|t| t.depth).max(), Some(1));
//! ```

mod classify;
mod lex;
mod types;

use smallvec::{SmallVec, smallvec};
pub use types::{Category, Token};

use self::{
    classify::{Context, classify, is_dml_word, names_call},
    lex::{LexKind, Lexeme, lex}
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Piece<'a> {
    text:     &'a str,
    depth:    usize,
    category: Category
}

/// Tokenized SQL text. Iterate with [`tokens`](Self::tokens) as often as
/// needed; each call yields the same sequence.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    sql:            &'a str,
    initial_offset: usize,
    pieces:         Vec<Piece<'a>>
}

impl<'a> Tokenizer<'a> {
    /// Tokenize `sql` whose first line starts at column `initial_offset` of
    /// the host source.
    pub fn new(sql: &'a str, initial_offset: usize) -> Self {
        let lexemes = lex(sql);
        Self {
            sql,
            initial_offset,
            pieces: flatten(sql, &lexemes)
        }
    }

    pub fn sql(&self) -> &'a str {
        self.sql
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Positioned tokens in source order.
    pub fn tokens(&self) -> Tokens<'_, 'a> {
        Tokens {
            pieces: self.pieces.iter(),
            row:    0,
            col:    self.initial_offset
        }
    }
}

/// Iterator over the tokens of a [`Tokenizer`], tracking row and column.
#[derive(Debug, Clone)]
pub struct Tokens<'t, 'a> {
    pieces: std::slice::Iter<'t, Piece<'a>>,
    row:    usize,
    col:    usize
}

impl<'a> Iterator for Tokens<'_, 'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let piece = self.pieces.next()?;
        let token = Token {
            value:    piece.text,
            row:      self.row,
            col:      self.col,
            depth:    piece.depth,
            category: piece.category
        };
        if piece.category == Category::Newline {
            self.row += 1;
            self.col = 0;
        } else if let Some(last) = piece.text.rfind('\n') {
            // comments and string literals may carry line breaks
            self.row += piece.text.matches('\n').count();
            self.col = piece.text[last + 1..].chars().count();
        } else {
            self.col += token.width();
        }
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pieces.size_hint()
    }
}

impl ExactSizeIterator for Tokens<'_, '_> {}

/// A parenthesised group, or the statement itself.
#[derive(Debug, Clone, Copy)]
struct Frame {
    depth:  usize,
    /// Argument list of a function call, until a DML verb shows up in it
    call:   bool,
    nested: bool
}

impl Frame {
    const STATEMENT: Frame = Frame {
        depth:  0,
        call:   false,
        nested: false
    };
}

fn flatten<'a>(sql: &'a str, lexemes: &[Lexeme]) -> Vec<Piece<'a>> {
    let mut frames: SmallVec<[Frame; 8]> = smallvec![Frame::STATEMENT];
    let mut pieces = Vec::with_capacity(lexemes.len());
    for (i, lexeme) in lexemes.iter().enumerate() {
        let text = lexeme.text(sql);
        let after_period = i
            .checked_sub(1)
            .and_then(|p| lexemes.get(p))
            .is_some_and(|previous| is_period(sql, previous));
        let upper = lexeme.is_unquoted_word().then(|| text.to_uppercase());
        if let Some(upper) = &upper
            && !after_period
            && is_dml_word(upper)
            && let Some(frame) = frames.last_mut()
            && frame.nested
        {
            frame.depth += 1;
            frame.call = false;
        }
        let frame = frames.last().copied().unwrap_or(Frame::STATEMENT);
        let next_is_lparen = lexemes[i + 1..]
            .iter()
            .find(|next| next.kind != LexKind::Space)
            .is_some_and(|next| next.kind == LexKind::LParen);
        let context = Context {
            in_call: frame.call,
            next_is_lparen,
            after_period
        };
        pieces.push(Piece {
            text,
            depth: frame.depth,
            category: classify(text, lexeme.kind, context)
        });
        match lexeme.kind {
            LexKind::LParen => {
                frames.push(Frame {
                    depth:  frame.depth,
                    call:   opens_call(sql, &lexemes[..i]),
                    nested: true
                });
            }
            LexKind::RParen if frames.len() > 1 => {
                frames.pop();
            }
            LexKind::Semicolon => frames.truncate(1),
            _ => {}
        }
    }
    pieces
}

fn is_period(sql: &str, lexeme: &Lexeme) -> bool {
    lexeme.kind == LexKind::Punctuation && lexeme.text(sql) == "."
}

/// Whether a `(` following `before` starts the argument list of a call.
fn opens_call(sql: &str, before: &[Lexeme]) -> bool {
    let mut rest = before
        .iter()
        .rev()
        .skip_while(|lexeme| lexeme.kind == LexKind::Space);
    let Some(name) = rest.next().filter(|lexeme| lexeme.is_unquoted_word()) else {
        return false;
    };
    rest.next().is_some_and(|previous| is_period(sql, previous))
        || names_call(&name.text(sql).to_uppercase())
}
