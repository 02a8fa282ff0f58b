//! Annotated tokens and the documents that carry them.
//!
//! These types form the boundary with the NLP engine: the engine produces
//! them, the pipeline only reads them.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::{SpanRef, VocabError, VocabResult};

/// Universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    /// Adjective
    Adj,
    /// Adposition
    Adp,
    /// Adverb
    Adv,
    /// Auxiliary verb
    Aux,
    /// Coordinating conjunction
    Cconj,
    /// Determiner
    Det,
    /// Interjection
    Intj,
    Noun,
    /// Numeral
    Num,
    /// Particle
    Part,
    /// Pronoun
    Pron,
    /// Proper noun
    Propn,
    /// Punctuation
    Punct,
    /// Subordinating conjunction
    Sconj,
    /// Symbol
    Sym,
    Verb,
    /// Anything else
    X,
}

impl PartOfSpeech {
    /// The uppercase tag name, as written in configuration files.
    pub fn tag(self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Part => "PART",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::X => "X",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One input token enriched with its dictionary form, grammatical category
/// and punctuation/alphabetic flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// The token exactly as written in the entry
    pub surface_text: String,
    /// Dictionary form
    pub lemma: String,
    pub part_of_speech: PartOfSpeech,
    pub is_punctuation: bool,
    pub is_alphabetic: bool,
}

impl AnnotatedToken {
    /// Create a token, deriving both flags from the surface text.
    pub fn new(
        surface_text: impl Into<String>,
        lemma: impl Into<String>,
        part_of_speech: PartOfSpeech,
    ) -> Self {
        let surface_text = surface_text.into();
        let is_punctuation = is_punctuation_text(&surface_text);
        let is_alphabetic = !surface_text.is_empty() && surface_text.chars().all(char::is_alphabetic);
        Self {
            surface_text,
            lemma: lemma.into(),
            part_of_speech,
            is_punctuation,
            is_alphabetic,
        }
    }

    /// Orthographic shape of the surface text; see [`token_shape`].
    pub fn shape(&self) -> String {
        token_shape(&self.surface_text)
    }
}

/// True for non-empty text made only of punctuation characters.
pub fn is_punctuation_text(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_punctuation() || matches!(c, '¿' | '¡' | '…' | '«' | '»' | '“' | '”' | '‘' | '’' | '–' | '—'))
}

/// Orthographic shape of a token.
///
/// Uppercase letters become `X`, other letters `x`, digits `d`, and every
/// other character is kept as is. Runs of the same shape character are
/// capped at four, so `7890` and `78901` both have shape `dddd`.
///
/// ```
/// use layered_vocab::token_shape;
///
/// assert_eq!(token_shape("123-456-7890"), "ddd-ddd-dddd");
/// assert_eq!(token_shape("(123)"), "(ddd)");
/// assert_eq!(token_shape("Norwood"), "Xxxxx");
/// ```
pub fn token_shape(text: &str) -> String {
    let mut shape = String::with_capacity(text.len());
    let mut last = None;
    let mut run = 0;
    for c in text.chars() {
        let shape_char = if c.is_alphabetic() {
            if c.is_uppercase() {
                'X'
            } else {
                'x'
            }
        } else if c.is_numeric() {
            'd'
        } else {
            c
        };

        if Some(shape_char) == last {
            run += 1;
        } else {
            run = 0;
            last = Some(shape_char);
        }

        if run < 4 {
            shape.push(shape_char);
        }
    }
    shape
}

/// The engine's annotation of one entry.
///
/// Keeps the original text next to the tokens so that the text of any token
/// span can be sliced out exactly as the user wrote it, whitespace included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doc {
    text: String,
    tokens: Vec<AnnotatedToken>,
    offsets: Vec<Range<usize>>,
}

impl Doc {
    /// Build a document, checking that every token has a byte range that
    /// lies inside `text`, on character boundaries, in ascending order.
    pub fn new(
        text: impl Into<String>,
        tokens: Vec<AnnotatedToken>,
        offsets: Vec<Range<usize>>,
    ) -> VocabResult<Self> {
        let text = text.into();
        if tokens.len() != offsets.len() {
            return Err(VocabError::pipeline(format!(
                "{} tokens annotated with {} offsets",
                tokens.len(),
                offsets.len()
            )));
        }

        let mut previous_end = 0;
        for (idx, range) in offsets.iter().enumerate() {
            if range.start > range.end
                || range.start < previous_end
                || range.end > text.len()
                || !text.is_char_boundary(range.start)
                || !text.is_char_boundary(range.end)
            {
                return Err(VocabError::pipeline(format!(
                    "token {} has offsets {:?} outside of the entry text",
                    idx, range
                )));
            }
            previous_end = range.end;
        }

        Ok(Self {
            text,
            tokens,
            offsets,
        })
    }

    /// Build a document from `(surface, lemma, pos)` triples, laying the
    /// tokens out in a text separated by single spaces.
    ///
    /// Handy for feeding pre-recorded annotations through the pipeline.
    pub fn from_annotations<'a, I>(annotations: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, PartOfSpeech)>,
    {
        let mut text = String::new();
        let mut tokens = Vec::new();
        let mut offsets = Vec::new();
        for (surface, lemma, pos) in annotations {
            if !text.is_empty() {
                text.push(' ');
            }
            let start = text.len();
            text.push_str(surface);
            offsets.push(start..text.len());
            tokens.push(AnnotatedToken::new(surface, lemma, pos));
        }
        Self {
            text,
            tokens,
            offsets,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[AnnotatedToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Byte range of the token at `idx` in the entry text.
    pub fn offset(&self, idx: usize) -> Option<Range<usize>> {
        self.offsets.get(idx).cloned()
    }

    /// The entry text from the first to the last token of `span`.
    pub fn span_text(&self, span: SpanRef) -> Option<&str> {
        let start = self.offsets.get(span.start_idx)?.start;
        let end = self.offsets.get(span.end_idx)?.end;
        self.text.get(start..end)
    }
}

/// A contiguous span of the token stream that satisfied a named rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternMatch {
    /// The rule name, e.g. `FULL_NAME`
    pub rule_key: String,
    /// Tokens covered by the match
    pub span: SpanRef,
    /// Entry text covered by the match
    pub matched_text: String,
}

impl PatternMatch {
    pub fn new(rule_key: impl Into<String>, span: SpanRef, matched_text: impl Into<String>) -> Self {
        Self {
            rule_key: rule_key.into(),
            span,
            matched_text: matched_text.into(),
        }
    }
}
