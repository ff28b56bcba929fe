use super::{CheckContext, Diagnostic, Rule, RuleInfo, Severity, codes};

/// Identifiers must be snake_case without a trailing underscore
pub struct NamingRule;

impl Rule for NamingRule {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id:       "naming",
            name:     "Identifier naming",
            codes:    &[codes::INVALID_NAME],
            severity: Severity::Warning
        }
    }

    fn check(&self, ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        let info = self.info();
        ctx.tokens
            .iter()
            .filter(|token| token.is_name())
            .filter(|token| !is_lowercase(token.value) || token.value.ends_with('_'))
            .map(|token| {
                ctx.diagnostic(
                    &info,
                    codes::INVALID_NAME,
                    format!(
                        "name {} is not valid, must be snake_case, and cannot end with `_`",
                        token.value
                    )
                )
            })
            .collect()
    }
}

/// At least one cased character and no uppercase ones.
fn is_lowercase(word: &str) -> bool {
    word.chars().any(char::is_lowercase) && !word.chars().any(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_lowercase() {
        assert!(is_lowercase("table_column"));
        assert!(is_lowercase("clm1"));
        assert!(!is_lowercase("tableColumn"));
        assert!(!is_lowercase("_"));
    }
}
