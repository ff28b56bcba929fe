use super::{CheckContext, Diagnostic, Rule, RuleInfo, Severity, codes};
use crate::keywords;

/// Keywords and function names must be uppercase and unabbreviated
pub struct CasingRule;

impl Rule for CasingRule {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id:       "casing",
            name:     "Keyword casing",
            codes:    &[codes::KEYWORD_NOT_UPPERCASE, codes::ABBREVIATED_KEYWORD],
            severity: Severity::Warning
        }
    }

    fn check(&self, ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        let info = self.info();
        let mut diagnostics = Vec::new();
        for token in ctx.tokens {
            if !token.is_keyword() && !token.is_function_name() {
                continue;
            }
            let word = token.value;
            let upper = word.to_uppercase();
            if !is_uppercase(word) && !ctx.excepted_names.contains(&upper) {
                diagnostics.push(ctx.diagnostic(
                    &info,
                    codes::KEYWORD_NOT_UPPERCASE,
                    format!("keyword {} is not uppercase", word)
                ));
            }
            if keywords::is_abbreviated(&upper) {
                diagnostics.push(ctx.diagnostic(
                    &info,
                    codes::ABBREVIATED_KEYWORD,
                    format!("avoid abbreviated keywords, {}", word)
                ));
            }
        }
        diagnostics
    }
}

/// At least one cased character and no lowercase ones.
pub(crate) fn is_uppercase(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}
