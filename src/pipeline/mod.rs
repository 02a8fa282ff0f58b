//! The single pass that turns an annotated entry into a vocabulary delta.
//!
//! ```text
//! entry ─ Engine::annotate ─▶ Doc ─ Engine::find_matches ─▶ [PatternMatch]
//!                                                                 │
//!                                        PatternMatchExpander ◀───╯
//!                                                 │ RejectionSet
//!   for each token ▶ RejectionFilter ▶ OverrideResolver ▶ Accumulator ▶ VocabularyDelta
//! ```
//!
//! Decisions are made strictly left to right, and whether a token is a
//! duplicate depends only on the tokens accepted before it.

mod accumulator;
mod expander;
mod filter;
mod overrides;

use std::fmt;
use std::sync::Arc;

pub use accumulator::{Accumulator, VocabularyDelta};
pub use expander::{PatternMatchExpander, RejectionSet};
pub use filter::{ExceptionSet, RejectReason, RejectionFilter};
pub use overrides::{OverrideResolver, Resolution};

use crate::{Doc, Engine, Language, LanguageConfig, PatternMatch, VocabError, VocabResult};

/// What happened to one token of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenDecision {
    /// Normalized and appended to the delta
    Accepted { normalized: String },
    /// Normalized to a form the delta already held
    Merged { normalized: String },
    Rejected(RejectReason),
}

impl TokenDecision {
    /// The normalized form, for tokens that were not rejected.
    pub fn normalized(&self) -> Option<&str> {
        match self {
            TokenDecision::Accepted { normalized } | TokenDecision::Merged { normalized } => {
                Some(normalized)
            }
            TokenDecision::Rejected(_) => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, TokenDecision::Rejected(_))
    }
}

impl fmt::Display for TokenDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenDecision::Accepted { normalized } => write!(f, "accepted {}", normalized),
            TokenDecision::Merged { normalized } => write!(f, "merged into {}", normalized),
            TokenDecision::Rejected(reason) => write!(f, "rejected {}", reason),
        }
    }
}

/// A fully explained run of the pipeline over one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub doc: Doc,
    pub matches: Vec<PatternMatch>,
    pub rejections: RejectionSet,
    /// One decision per token of `doc`, by index
    pub decisions: Vec<TokenDecision>,
    pub delta: VocabularyDelta,
}

/// Extracts the vocabulary of free-text entries for one language.
///
/// Holds no state between entries, so a single normalizer may be shared
/// across threads when its engine can be.
#[derive(Debug)]
pub struct Normalizer<E> {
    engine: E,
    config: Arc<LanguageConfig>,
}

impl<E: Engine> Normalizer<E> {
    /// Pair an engine with the configuration of the same language.
    pub fn new(engine: E, config: Arc<LanguageConfig>) -> VocabResult<Self> {
        if engine.language() != config.language {
            return Err(VocabError::pipeline(format!(
                "{} engine cannot run with the {} configuration",
                engine.language(),
                config.language
            )));
        }
        Ok(Self { engine, config })
    }

    pub fn language(&self) -> Language {
        self.config.language
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &LanguageConfig {
        &self.config
    }

    /// The vocabulary of `entry`: its tokens' normalized forms, minus
    /// punctuation, duplicates and pattern matches not excepted.
    pub fn normalize(&self, entry: &str, exceptions: &ExceptionSet) -> VocabResult<VocabularyDelta> {
        let doc = self.engine.annotate(entry)?;
        let matches = self.engine.find_matches(&doc)?;
        Ok(self.normalize_doc(&doc, &matches, exceptions))
    }

    /// Like [`normalize`](Self::normalize), keeping every intermediate result.
    pub fn evaluate(&self, entry: &str, exceptions: &ExceptionSet) -> VocabResult<Evaluation> {
        let doc = self.engine.annotate(entry)?;
        let matches = self.engine.find_matches(&doc)?;
        Ok(self.evaluate_doc(doc, matches, exceptions))
    }

    /// Run the pass over an already annotated document.
    pub fn normalize_doc(
        &self,
        doc: &Doc,
        matches: &[PatternMatch],
        exceptions: &ExceptionSet,
    ) -> VocabularyDelta {
        let (_, delta) = self.pass(doc, matches, exceptions, |_| {});
        delta
    }

    pub fn evaluate_doc(
        &self,
        doc: Doc,
        matches: Vec<PatternMatch>,
        exceptions: &ExceptionSet,
    ) -> Evaluation {
        let mut decisions = Vec::with_capacity(doc.len());
        let (rejections, delta) =
            self.pass(&doc, &matches, exceptions, |decision| decisions.push(decision));
        Evaluation {
            doc,
            matches,
            rejections,
            decisions,
            delta,
        }
    }

    fn pass(
        &self,
        doc: &Doc,
        matches: &[PatternMatch],
        exceptions: &ExceptionSet,
        mut on_decision: impl FnMut(TokenDecision),
    ) -> (RejectionSet, VocabularyDelta) {
        let rejections = PatternMatchExpander.expand(matches);
        let filter = RejectionFilter::new(&rejections, exceptions, self.config.membership);
        let resolver = OverrideResolver::new(&self.config.overrides);
        let mut accepted = Accumulator::new();

        for (idx, token) in doc.tokens().iter().enumerate() {
            let decision = match filter.check(token, &accepted) {
                Some(reason) => {
                    tracing::trace!(idx, surface = %token.surface_text, %reason, "rejected token");
                    TokenDecision::Rejected(reason)
                }
                None => {
                    let resolution = resolver.resolve(token);
                    if let Some(group) = resolution.group {
                        tracing::trace!(
                            idx,
                            surface = %token.surface_text,
                            normalized = resolution.normalized,
                            group,
                            "override applied"
                        );
                    }
                    let normalized = resolution.normalized.to_string();
                    if accepted.push(&normalized) {
                        TokenDecision::Accepted { normalized }
                    } else {
                        TokenDecision::Merged { normalized }
                    }
                }
            };
            on_decision(decision);
        }

        tracing::debug!(
            language = %self.config.language,
            tokens = doc.len(),
            matches = matches.len(),
            accepted = accepted.len(),
            "normalized entry"
        );
        (rejections, accepted.into_delta())
    }
}
