use super::{CheckContext, Diagnostic, Rule, RuleInfo, Severity, codes};
use crate::tokenizer::Token;

/// Spacing around commas, comparison operators and statement terminators
pub struct WhitespaceRule;

impl Rule for WhitespaceRule {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id:       "whitespace",
            name:     "Operator whitespace",
            codes:    &[
                codes::COMMA_WHITESPACE,
                codes::COMPARISON_WHITESPACE,
                codes::TERMINATOR_NEWLINE
            ],
            severity: Severity::Warning
        }
    }

    fn check(&self, ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        let info = self.info();
        let mut diagnostics = Vec::new();
        for (index, token) in ctx.tokens.iter().enumerate() {
            let before = index.checked_sub(1).and_then(|i| ctx.tokens.get(i));
            let after = ctx.tokens.get(index + 1);
            let pre_whitespace = before.is_some_and(Token::is_whitespace);
            let post_whitespace = after.is_some_and(Token::is_whitespace);
            let post_newline = after.is_none_or(Token::is_newline);
            if token.is_punctuation() {
                if token.value == "," && !post_whitespace {
                    diagnostics.push(ctx.diagnostic(
                        &info,
                        codes::COMMA_WHITESPACE,
                        "incorrect whitespace around comma".to_string()
                    ));
                } else if token.value == ";" && !post_newline {
                    diagnostics.push(ctx.diagnostic(
                        &info,
                        codes::TERMINATOR_NEWLINE,
                        "missing newline after semicolon".to_string()
                    ));
                }
            } else if token.is_comparison() && (!pre_whitespace || !post_whitespace) {
                diagnostics.push(ctx.diagnostic(
                    &info,
                    codes::COMPARISON_WHITESPACE,
                    format!("incorrect whitespace around {}", token.value)
                ));
            }
        }
        diagnostics
    }
}
