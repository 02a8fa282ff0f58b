//! Token rejection.

use std::collections::HashSet;
use std::fmt;

use super::accumulator::Accumulator;
use super::expander::RejectionSet;
use crate::{AnnotatedToken, SpanMembership};

/// Surface forms exempted from pattern-based rejection for one call.
///
/// Exceptions never rescue punctuation or duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionSet {
    surfaces: HashSet<String>,
}

impl ExceptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, surface: impl Into<String>) -> bool {
        self.surfaces.insert(surface.into())
    }

    pub fn contains(&self, surface: &str) -> bool {
        self.surfaces.contains(surface)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExceptionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            surfaces: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Why a token was kept out of the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// The token is punctuation
    Punctuation,
    /// The token's lemma or surface was already accepted
    Duplicate,
    /// The token is part of a pattern match and not excepted
    Pattern,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RejectReason::Punctuation => "punctuation",
            RejectReason::Duplicate => "duplicate",
            RejectReason::Pattern => "pattern",
        })
    }
}

/// Decides, one token at a time, whether a token is excluded.
///
/// Checks run in order: punctuation, then duplicates against the tokens
/// accepted so far, then the rejection set unless the surface is excepted.
#[derive(Debug, Clone, Copy)]
pub struct RejectionFilter<'a> {
    rejections: &'a RejectionSet,
    exceptions: &'a ExceptionSet,
    membership: SpanMembership,
}

impl<'a> RejectionFilter<'a> {
    pub fn new(
        rejections: &'a RejectionSet,
        exceptions: &'a ExceptionSet,
        membership: SpanMembership,
    ) -> Self {
        Self {
            rejections,
            exceptions,
            membership,
        }
    }

    /// `None` when the token may go on to normalization.
    pub fn check(&self, token: &AnnotatedToken, accepted: &Accumulator) -> Option<RejectReason> {
        if token.is_punctuation {
            return Some(RejectReason::Punctuation);
        }

        if accepted.contains(&token.lemma) || accepted.contains(&token.surface_text) {
            return Some(RejectReason::Duplicate);
        }

        let matched = self.rejections.matches(&token.lemma, self.membership)
            || self.rejections.matches(&token.surface_text, self.membership);
        if matched && !self.exceptions.contains(&token.surface_text) {
            return Some(RejectReason::Pattern);
        }

        None
    }
}
