//! River alignment of multi-line statements.
//!
//! At each nesting depth the first root keyword fixes the river: every later
//! root keyword at that depth starts its own line and ends in the same
//! column, and every other token sits right of the river. A subquery's
//! first token sits right of its parent's river.
//!
//! ```text
//! SELECT abc,
//!        def
//!   FROM xyz
//!  WHERE abc IN (SELECT ghi
//!                  FROM jkl)
//! ```

use smallvec::SmallVec;

use super::{CheckContext, Diagnostic, Rule, RuleInfo, Severity, codes};
use crate::tokenizer::Token;

/// Governing root token per depth; `None` where no root is established yet.
type RootStack<'a> = SmallVec<[Option<Token<'a>>; 4]>;

/// Multi-line statements must follow the river layout
pub struct AlignmentRule;

impl Rule for AlignmentRule {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id:       "alignment",
            name:     "River alignment",
            codes:    &[
                codes::MISSING_LINE_BREAK,
                codes::ROOT_NOT_ALIGNED,
                codes::SUBQUERY_NOT_INDENTED,
                codes::TOKEN_LEFT_OF_RIVER
            ],
            severity: Severity::Warning
        }
    }

    fn check(&self, ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        if !ctx.query.is_multiline() {
            return vec![];
        }
        let info = self.info();
        let mut diagnostics = Vec::new();
        let mut roots = RootStack::new();
        for token in ctx.tokens {
            if token.is_terminator() {
                roots.clear();
                continue;
            }
            let depth = token.depth;
            match root_at(&roots, depth) {
                None => {
                    let parent = depth.checked_sub(1).and_then(|d| root_at(&roots, d));
                    if token.is_root_keyword() {
                        if roots.len() <= depth {
                            roots.resize(depth + 1, None);
                        }
                        roots[depth] = Some(*token);
                    }
                    if let Some(parent) = parent
                        && !token.is_whitespace()
                        && token.col < parent.river_column()
                    {
                        diagnostics.push(ctx.diagnostic(
                            &info,
                            codes::SUBQUERY_NOT_INDENTED,
                            "subquery should be aligned to the right of the river".to_string()
                        ));
                    }
                }
                Some(root) if token.is_root_keyword() => {
                    if root.row == token.row {
                        diagnostics.push(ctx.diagnostic(
                            &info,
                            codes::MISSING_LINE_BREAK,
                            format!(
                                "missing line break between root keywords {} and {}",
                                root.value, token.value
                            )
                        ));
                    } else if root.right_edge() != token.right_edge() {
                        diagnostics.push(ctx.diagnostic(
                            &info,
                            codes::ROOT_NOT_ALIGNED,
                            format!(
                                "root keywords {} and {} are not right aligned",
                                root.value, token.value
                            )
                        ));
                    }
                }
                Some(root) => {
                    if !token.is_whitespace()
                        && !token.is_descriptor()
                        && token.col < root.river_column()
                    {
                        diagnostics.push(ctx.diagnostic(
                            &info,
                            codes::TOKEN_LEFT_OF_RIVER,
                            format!(
                                "token {} should be aligned to the right of the river",
                                token.value
                            )
                        ));
                    }
                }
            }
        }
        diagnostics
    }
}

fn root_at<'a>(roots: &RootStack<'a>, depth: usize) -> Option<Token<'a>> {
    roots.get(depth).copied().flatten()
}
