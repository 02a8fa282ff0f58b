//! Pipeline tests over pre-recorded engine output.
//!
//! The annotations mimic a statistical engine: pronouns lemmatize to the
//! placeholder `-PRON-` and the override table is what turns them into words.


use std::collections::HashMap;

use crate::{
    AnnotatedToken, Doc, Engine, Language, PartOfSpeech, PatternMatch, SpanRef, VocabError,
    VocabResult,
};

/// An engine that replays annotations recorded for known entries.
#[derive(Debug, Clone)]
pub(crate) struct RecordedEngine {
    language: Language,
    entries: HashMap<String, (Doc, Vec<PatternMatch>)>,
}

impl RecordedEngine {
    pub(crate) fn new(language: Language) -> Self {
        Self {
            language,
            entries: HashMap::new(),
        }
    }

    /// Record `annotations` for `text`, and a match of `rule_key` for every
    /// `(start, end)` token span.
    pub(crate) fn with_entry(
        mut self,
        text: &str,
        annotations: &[(&str, &str, PartOfSpeech)],
        matches: &[(&str, usize, usize)],
    ) -> Self {
        let doc = recorded_doc(text, annotations);
        let matches = matches
            .iter()
            .map(|&(rule_key, start, end)| {
                let span = SpanRef::new(start, end);
                let matched_text = doc.span_text(span).unwrap().to_string();
                PatternMatch::new(rule_key, span, matched_text)
            })
            .collect();
        self.entries.insert(text.to_string(), (doc, matches));
        self
    }
}

impl Engine for RecordedEngine {
    fn language(&self) -> Language {
        self.language
    }

    fn annotate(&self, text: &str) -> VocabResult<Doc> {
        self.entries
            .get(text)
            .map(|(doc, _)| doc.clone())
            .ok_or_else(|| VocabError::pipeline(format!("nothing recorded for {:?}", text)))
    }

    fn find_matches(&self, doc: &Doc) -> VocabResult<Vec<PatternMatch>> {
        Ok(self
            .entries
            .get(doc.text())
            .map(|(_, matches)| matches.clone())
            .unwrap_or_default())
    }
}

/// Lay `annotations` over `text`, finding each surface after the previous one.
pub(crate) fn recorded_doc(text: &str, annotations: &[(&str, &str, PartOfSpeech)]) -> Doc {
    let mut cursor = 0;
    let mut tokens = Vec::new();
    let mut offsets = Vec::new();
    for &(surface, lemma, pos) in annotations {
        let start = cursor + text[cursor..].find(surface).unwrap();
        cursor = start + surface.len();
        offsets.push(start..cursor);
        tokens.push(AnnotatedToken::new(surface, lemma, pos));
    }
    Doc::new(text, tokens, offsets).unwrap()
}
