use crate::rules::Rule;
use crate::translate::Translator;

/// Applies a single rule to `text`.
pub(crate) fn apply(rule: Rule, text: &str) -> String {
    rule.compile()
        .expect("rule failed to compile")
        .apply(text.to_string())
}

/// Applies the whole ruleset to `text`, without the boilerplate.
pub(crate) fn rewrite(text: &str) -> String {
    Translator::new()
        .expect("ruleset failed to compile")
        .rewrite(text.to_string())
        .0
}
