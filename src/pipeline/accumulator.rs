use std::collections::HashSet;

/// The tokens newly accepted while evaluating one entry, in order of first
/// acceptance and without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyDelta {
    tokens: Vec<String>,
}

impl VocabularyDelta {
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }
}

impl IntoIterator for VocabularyDelta {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

/// Later repeats of a token are dropped.
impl<S: AsRef<str>> FromIterator<S> for VocabularyDelta {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut accumulator = Accumulator::new();
        for token in iter {
            accumulator.push(token.as_ref());
        }
        accumulator.into_delta()
    }
}

/// Ordered, duplicate-free collection of accepted normalized tokens.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    tokens: Vec<String>,
    seen: HashSet<String>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `normalized` unless it is already present. Returns whether it
    /// was appended.
    pub fn push(&mut self, normalized: &str) -> bool {
        if self.seen.contains(normalized) {
            return false;
        }
        self.seen.insert(normalized.to_string());
        self.tokens.push(normalized.to_string());
        true
    }

    pub fn contains(&self, token: &str) -> bool {
        self.seen.contains(token)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn into_delta(self) -> VocabularyDelta {
        VocabularyDelta {
            tokens: self.tokens,
        }
    }
}
