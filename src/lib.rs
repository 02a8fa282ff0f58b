#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Vocabulary extraction for free-text journal entries.
//!
//! An entry is annotated by an [`Engine`] (tokens, lemmas, part-of-speech
//! tags and matches of per-language rejection rules). The [`Normalizer`]
//! then walks the tokens once, left to right, and keeps the normalized form
//! of every token that is not punctuation, not a repeat and not part of a
//! rejected pattern such as a full name or a phone number.
//!
//! ## Usage
//!
//! ```ignore
//! use layered_vocab::{ExceptionSet, Language, LanguageConfig, Normalizer};
//! use layered_vocab_engine::RuleEngine;
//!
//! let config = LanguageConfig::builtin(Language::English)?;
//! let normalizer = Normalizer::new(RuleEngine::new(config.clone())?, config)?;
//! let delta = normalizer.normalize("call me at number 123-456-7890", &ExceptionSet::new())?;
//! assert_eq!(delta.tokens(), ["call", "I", "at", "number"]);
//! ```
//!
//! ## Configuration
//!
//! Each [`Language`] carries a [`LanguageConfig`] of named rejection rules,
//! an [`OverrideTable`] of lemma corrections keyed by surface text, and
//! tokenizer settings for the engine. See [`config`] for the file format.

pub mod config;
mod display;
mod engine;
mod errors;
mod language;
mod pipeline;
mod span;
mod token;

pub use config::{
    ConstraintKind, LanguageConfig, OverrideTable, RejectionPatternConfiguration, SpanMembership,
    TokenConstraint, TokenizerSettings,
};
pub use display::EvaluationDisplay;
pub use engine::Engine;
pub use errors::{VocabError, VocabResult};
pub use language::Language;
pub use pipeline::{
    Accumulator, Evaluation, ExceptionSet, Normalizer, OverrideResolver, PatternMatchExpander,
    RejectReason, RejectionFilter, RejectionSet, Resolution, TokenDecision, VocabularyDelta,
};
pub use span::SpanRef;
pub use token::{is_punctuation_text, token_shape, AnnotatedToken, Doc, PartOfSpeech, PatternMatch};

#[cfg(test)]
mod tests;
