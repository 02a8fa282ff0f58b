//! End-to-end tests of the rule engine through the normalizer.

mod english;
mod spanish;

use std::sync::Arc;

use layered_vocab::{ExceptionSet, Language, LanguageConfig, Normalizer, SpanMembership};

use crate::{builtin_normalizer, RuleEngine};

pub(crate) fn normalizer(language: Language, membership: SpanMembership) -> Normalizer<RuleEngine> {
    let config = LanguageConfig::builtin(language)
        .unwrap()
        .as_ref()
        .clone()
        .with_membership(membership);
    let config = Arc::new(config);
    Normalizer::new(RuleEngine::new(Arc::clone(&config)).unwrap(), config).unwrap()
}

/// Vocabulary of `entry` under the built-in configuration.
pub(crate) fn vocabulary(language: Language, entry: &str, exceptions: &[&str]) -> Vec<String> {
    let exceptions: ExceptionSet = exceptions.iter().copied().collect();
    builtin_normalizer(language)
        .unwrap()
        .normalize(entry, &exceptions)
        .unwrap()
        .into_vec()
}

pub(crate) fn vocabulary_with(
    language: Language,
    membership: SpanMembership,
    entry: &str,
    exceptions: &[&str],
) -> Vec<String> {
    let exceptions: ExceptionSet = exceptions.iter().copied().collect();
    normalizer(language, membership)
        .normalize(entry, &exceptions)
        .unwrap()
        .into_vec()
}
