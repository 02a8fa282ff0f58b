#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! A deterministic, rule-based [`Engine`] for layered-vocab.
//!
//! `RuleEngine` tokenizes entries on whitespace and word boundaries, tags
//! and lemmatizes tokens from per-language word lists, and matches the
//! rejection rules of its [`LanguageConfig`].
//!
//! ## Usage
//!
//! ```
//! use layered_vocab::{ExceptionSet, Language};
//! use layered_vocab_engine::builtin_normalizer;
//!
//! let normalizer = builtin_normalizer(Language::English).unwrap();
//! let delta = normalizer
//!     .normalize("call me at number 123-456-7890", &ExceptionSet::new())
//!     .unwrap();
//! assert_eq!(delta.tokens(), ["call", "I", "at", "number"]);
//! ```
//!
//! ## Known limitations
//!
//! Capitalized words that are not at the start of a sentence are tagged
//! as proper nouns unless they belong to a closed word class, and the
//! lemmas of pronouns are left as written. The override tables of the
//! built-in configurations correct the pronouns.

mod lexicon;
mod matcher;
mod tagger;
mod tokenizer;

use std::sync::Arc;

use layered_vocab::{Doc, Engine, Language, LanguageConfig, Normalizer, PatternMatch, VocabResult};

use matcher::PatternMatcher;
use tagger::Tagger;
use tokenizer::Tokenizer;

/// Rule-based engine for one language. Immutable once built.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: Arc<LanguageConfig>,
    tokenizer: Tokenizer,
    tagger: Tagger,
    matcher: PatternMatcher,
}

impl RuleEngine {
    /// Build an engine running the rules and tokenizer settings of `config`.
    pub fn new(config: Arc<LanguageConfig>) -> VocabResult<Self> {
        config.validate()?;
        let tokenizer = Tokenizer::new(config.language, &config.tokenizer)?;
        let tagger = Tagger::new(config.language);
        let matcher = PatternMatcher::new(&config.patterns);

        tracing::debug!(
            language = %config.language,
            rules = matcher.rule_count(),
            "built rule engine"
        );
        Ok(Self {
            config,
            tokenizer,
            tagger,
            matcher,
        })
    }

    /// An engine for the embedded configuration of `language`.
    pub fn builtin(language: Language) -> VocabResult<Self> {
        Self::new(LanguageConfig::builtin(language)?)
    }

    pub fn config(&self) -> &Arc<LanguageConfig> {
        &self.config
    }
}

impl Engine for RuleEngine {
    fn language(&self) -> Language {
        self.config.language
    }

    fn annotate(&self, text: &str) -> VocabResult<Doc> {
        let offsets = self.tokenizer.tokenize(text);
        let surfaces: Vec<&str> = offsets.iter().map(|range| &text[range.clone()]).collect();
        let tokens = self.tagger.tag(&surfaces);
        Doc::new(text, tokens, offsets)
    }

    fn find_matches(&self, doc: &Doc) -> VocabResult<Vec<PatternMatch>> {
        self.matcher.find_matches(doc)
    }
}

/// A normalizer over the built-in engine and configuration of `language`.
pub fn builtin_normalizer(language: Language) -> VocabResult<Normalizer<RuleEngine>> {
    let engine = RuleEngine::builtin(language)?;
    let config = Arc::clone(engine.config());
    Normalizer::new(engine, config)
}

#[cfg(test)]
mod tests;
