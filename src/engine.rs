//! The seam between the pipeline and an NLP engine.

use std::sync::Arc;

use crate::{Doc, Language, PatternMatch, VocabResult};

/// Tokenizes, tags and lemmatizes entries for one language, and matches that
/// language's rejection rules against the result.
///
/// Implementations must be deterministic: the same text always yields the
/// same document and the same matches.
pub trait Engine {
    fn language(&self) -> Language;

    /// Annotate an entry.
    fn annotate(&self, text: &str) -> VocabResult<Doc>;

    /// All matches of the configured rules, ordered by span start.
    fn find_matches(&self, doc: &Doc) -> VocabResult<Vec<PatternMatch>>;
}

impl<E: Engine + ?Sized> Engine for &E {
    fn language(&self) -> Language {
        (**self).language()
    }

    fn annotate(&self, text: &str) -> VocabResult<Doc> {
        (**self).annotate(text)
    }

    fn find_matches(&self, doc: &Doc) -> VocabResult<Vec<PatternMatch>> {
        (**self).find_matches(doc)
    }
}

impl<E: Engine + ?Sized> Engine for Arc<E> {
    fn language(&self) -> Language {
        (**self).language()
    }

    fn annotate(&self, text: &str) -> VocabResult<Doc> {
        (**self).annotate(text)
    }

    fn find_matches(&self, doc: &Doc) -> VocabResult<Vec<PatternMatch>> {
        (**self).find_matches(doc)
    }
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn language(&self) -> Language {
        (**self).language()
    }

    fn annotate(&self, text: &str) -> VocabResult<Doc> {
        (**self).annotate(text)
    }

    fn find_matches(&self, doc: &Doc) -> VocabResult<Vec<PatternMatch>> {
        (**self).find_matches(doc)
    }
}
