//! Expansion of pattern matches into the strings they reject.

use std::collections::BTreeSet;

use crate::{PatternMatch, SpanMembership};

/// The flat set of surface strings rejected by an entry's pattern matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectionSet {
    strings: BTreeSet<String>,
}

impl RejectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `text` on whitespace and add every piece.
    pub fn insert_span_text(&mut self, text: &str) {
        for piece in text.split_whitespace() {
            self.strings.insert(piece.to_string());
        }
    }

    /// Exact membership.
    pub fn contains(&self, s: &str) -> bool {
        self.strings.contains(s)
    }

    /// True when `s` occurs inside any rejection string.
    pub fn contains_within(&self, s: &str) -> bool {
        !s.is_empty() && self.strings.iter().any(|rejected| rejected.contains(s))
    }

    /// Membership under the configured mode.
    pub fn matches(&self, s: &str, membership: SpanMembership) -> bool {
        match membership {
            SpanMembership::Token => self.contains(s),
            SpanMembership::Contains => self.contains_within(s),
        }
    }

    /// Rejection strings in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// Turns an entry's pattern matches into its [`RejectionSet`].
///
/// Every match's text is split on whitespace and each piece is rejected.
/// A match is therefore only expanded into its tokens when those tokens were
/// separated by whitespace in the entry: the compact phone format
/// `(123)-456-7890` is matched as five tokens but expands into the single
/// string `(123)-456-7890`, which none of its tokens equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternMatchExpander;

impl PatternMatchExpander {
    pub fn new() -> Self {
        Self
    }

    pub fn expand(&self, matches: &[PatternMatch]) -> RejectionSet {
        let mut rejections = RejectionSet::new();
        for pattern_match in matches {
            rejections.insert_span_text(&pattern_match.matched_text);
        }
        rejections
    }
}
