use log::debug;
use thiserror::Error;

use crate::boilerplate;
use crate::rules::{Rule, Ruleset};
use crate::source::{FetchError, Source};

/// Everything that can stop a translation.
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be retrieved.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A rewrite pattern is not a valid regular expression.
    #[error("invalid rewrite pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Strict mode only: these rules did not match anywhere in the input.
    #[error("rewrite rules matched nothing: {}", display_rules(.0))]
    Unmatched(Vec<Rule>),
}

fn display_rules(rules: &[Rule]) -> String {
    rules
        .iter()
        .map(|rule| format!("{} ({})", rule.number(), rule))
        .collect::<Vec<_>>()
        .join(", ")
}

/// How many replacements each rule made during one rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleReport {
    counts: Vec<(Rule, usize)>,
}

impl RuleReport {
    /// Match counts per rule, in application order.
    pub fn counts(&self) -> &[(Rule, usize)] {
        &self.counts
    }

    /// The number of replacements made by `rule`.
    pub fn count(&self, rule: Rule) -> usize {
        self.counts
            .iter()
            .find(|(r, _)| *r == rule)
            .map_or(0, |(_, n)| *n)
    }

    /// Rules that left the text untouched.
    pub fn unmatched(&self) -> Vec<Rule> {
        self.counts
            .iter()
            .filter(|(_, n)| *n == 0)
            .map(|(rule, _)| *rule)
            .collect()
    }
}

/// Runs the ordered rewrite rules and wraps the result in the Haxe boilerplate.
#[derive(Debug, Clone)]
pub struct Translator {
    rules: Ruleset,
    strict: bool,
}

impl Translator {
    /// Creates a translator in the default, lenient mode where a rule that matches nothing is a no-op.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            rules: Ruleset::compile()?,
            strict: false,
        })
    }

    /// In strict mode, [`Translator::translate`] fails with [`Error::Unmatched`] if any rule matched nothing.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Applies every rule in order to `text`.
    pub fn rewrite(&self, text: String) -> (String, RuleReport) {
        let mut report = RuleReport::default();
        let text = self.rules.iter().fold(text, |text, rule| {
            let (text, count) = rule.apply_counted(text);
            debug!("rule {} ({}): {} replacement(s)", rule.rule().number(), rule.rule(), count);
            report.counts.push((rule.rule(), count));
            text
        });
        (text, report)
    }

    /// Translates `text`, recording `source_url` as its provenance.
    pub fn translate(&self, text: String, source_url: &str) -> Result<String, Error> {
        let (body, report) = self.rewrite(text);

        let unmatched = report.unmatched();
        if self.strict && !unmatched.is_empty() {
            return Err(Error::Unmatched(unmatched));
        }

        Ok(boilerplate::assemble(source_url, &body))
    }

    /// Fetches `source` and translates it, recording its URL as the provenance.
    pub fn translate_source(&self, source: &Source) -> Result<String, Error> {
        let text = source.fetch()?;
        self.translate(text, &source.url())
    }
}

/// Fetches `source` and translates it with a default [`Translator`].
pub fn translate(source: &Source) -> Result<String, Error> {
    Translator::new()?.translate_source(source)
}
