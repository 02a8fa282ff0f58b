//! Splits an entry into tokens, keeping each token's byte range.
//!
//! Whitespace separates chunks. A chunk is peeled of leading and trailing
//! punctuation until what remains is empty or a numeric token; the remaining
//! core is split on Unicode word boundaries, English clitics are split off,
//! and the configured extra infixes split words further.

use std::ops::Range;

use layered_vocab::{Language, TokenizerSettings, VocabError, VocabResult};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// `+1`, `123`, `(123)`, `456-7890`, `123-456-7890`, `3.14`
static NUMERIC_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\+?\d+(?:[.,]\d+)*|\(\d+\)|\d+(?:-\d+)+)$")
        .expect("Invalid numeric token regex")
});

const PREFIXES: &[char] = &['(', '[', '{', '"', '\'', '¿', '¡', '«', '“', '‘'];

const SUFFIXES: &[char] = &[
    ')', ']', '}', '"', '\'', '.', ',', ':', ';', '!', '?', '…', '»', '”', '’',
];

/// Split off the end of English words: `Don't` → `Do` `n't`.
const ENGLISH_CLITICS: &[&str] = &[
    "n't", "n’t", "'ll", "’ll", "'re", "’re", "'ve", "’ve", "'s", "’s", "'m", "’m", "'d", "’d",
];

#[derive(Debug, Clone)]
pub(crate) struct Tokenizer {
    language: Language,
    extra_infixes: Vec<Regex>,
}

impl Tokenizer {
    pub(crate) fn new(language: Language, settings: &TokenizerSettings) -> VocabResult<Self> {
        let extra_infixes = settings
            .extra_infixes
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| {
                    VocabError::config(language, format!("invalid extra infix {:?}: {}", pattern, e))
                })
            })
            .collect::<VocabResult<Vec<_>>>()?;

        Ok(Self {
            language,
            extra_infixes,
        })
    }

    /// Byte ranges of the tokens of `text`, in order.
    pub(crate) fn tokenize(&self, text: &str) -> Vec<Range<usize>> {
        let mut tokens = Vec::new();
        for chunk in whitespace_chunks(text) {
            self.tokenize_chunk(text, chunk, &mut tokens);
        }
        tokens
    }

    fn tokenize_chunk(&self, text: &str, chunk: Range<usize>, out: &mut Vec<Range<usize>>) {
        let Range { mut start, mut end } = chunk;
        let mut prefixes = Vec::new();
        let mut suffixes = Vec::new();

        loop {
            let core = &text[start..end];
            if core.is_empty() || NUMERIC_TOKEN.is_match(core) {
                break;
            }
            if let Some(c) = core.chars().next_back().filter(|c| SUFFIXES.contains(c)) {
                end -= c.len_utf8();
                suffixes.push(end..end + c.len_utf8());
                continue;
            }
            if let Some(c) = core.chars().next().filter(|c| PREFIXES.contains(c)) {
                prefixes.push(start..start + c.len_utf8());
                start += c.len_utf8();
                continue;
            }
            break;
        }

        out.extend(prefixes);
        if start < end {
            if NUMERIC_TOKEN.is_match(&text[start..end]) {
                out.push(start..end);
            } else {
                self.split_core(text, start..end, out);
            }
        }
        out.extend(suffixes.into_iter().rev());
    }

    fn split_core(&self, text: &str, core: Range<usize>, out: &mut Vec<Range<usize>>) {
        let segments: Vec<Range<usize>> = text[core.clone()]
            .split_word_bound_indices()
            .map(|(offset, segment)| core.start + offset..core.start + offset + segment.len())
            .collect();

        for word in merge_digit_groups(text, &segments) {
            let pieces = match self.clitic_split(&text[word.clone()]) {
                Some(at) => vec![word.start..word.start + at, word.start + at..word.end],
                None => vec![word],
            };
            for piece in pieces {
                self.split_infixes(text, piece, out);
            }
        }
    }

    fn clitic_split(&self, word: &str) -> Option<usize> {
        if self.language != Language::English {
            return None;
        }
        ENGLISH_CLITICS.iter().find_map(|clitic| {
            let at = word.len().checked_sub(clitic.len())?;
            if at == 0 {
                return None;
            }
            let tail = word.get(at..)?;
            tail.eq_ignore_ascii_case(clitic).then_some(at)
        })
    }

    fn split_infixes(&self, text: &str, word: Range<usize>, out: &mut Vec<Range<usize>>) {
        let mut pieces = vec![word];
        for infix in &self.extra_infixes {
            pieces = pieces
                .into_iter()
                .flat_map(|piece| split_on(infix, text, piece))
                .collect();
        }
        out.extend(pieces);
    }
}

fn whitespace_chunks(text: &str) -> Vec<Range<usize>> {
    let mut chunks = Vec::new();
    let mut chunk_start = None;
    for (idx, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(start) = chunk_start.take() {
                chunks.push(start..idx);
            }
        } else if chunk_start.is_none() {
            chunk_start = Some(idx);
        }
    }
    if let Some(start) = chunk_start {
        chunks.push(start..text.len());
    }
    chunks
}

/// Word boundaries break `456-7890` apart; glue digit groups joined by
/// hyphens back together.
fn merge_digit_groups(text: &str, segments: &[Range<usize>]) -> Vec<Range<usize>> {
    let is_digits = |range: &Range<usize>| {
        let s = &text[range.clone()];
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    };

    let mut merged = Vec::with_capacity(segments.len());
    let mut idx = 0;
    while idx < segments.len() {
        let start = segments[idx].start;
        let mut end = segments[idx].end;
        if is_digits(&segments[idx]) {
            while idx + 2 < segments.len()
                && &text[segments[idx + 1].clone()] == "-"
                && is_digits(&segments[idx + 2])
            {
                end = segments[idx + 2].end;
                idx += 2;
            }
        }
        merged.push(start..end);
        idx += 1;
    }
    merged
}

fn split_on(infix: &Regex, text: &str, piece: Range<usize>) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut cursor = piece.start;
    for found in infix.find_iter(&text[piece.clone()]) {
        if found.start() == found.end() {
            continue;
        }
        let (start, end) = (piece.start + found.start(), piece.start + found.end());
        if cursor < start {
            ranges.push(cursor..start);
        }
        ranges.push(start..end);
        cursor = end;
    }
    if cursor < piece.end {
        ranges.push(cursor..piece.end);
    }
    ranges
}
