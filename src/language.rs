//! Supported journal languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::VocabError;

/// A language with a configured rule set and lexicon.
///
/// The numeric selection codes are the ones offered at the interactive
/// prompt: `1` for the primary language, `2` for the secondary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    /// All configured languages, in selection order.
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    /// Resolve a numeric menu selection.
    pub fn from_selection(selection: u32) -> Result<Self, VocabError> {
        match selection {
            1 => Ok(Language::English),
            2 => Ok(Language::Spanish),
            other => Err(VocabError::UnsupportedLanguage {
                selection: other.to_string(),
            }),
        }
    }

    /// The numeric menu selection for this language.
    pub fn selection(self) -> u32 {
        match self {
            Language::English => 1,
            Language::Spanish => 2,
        }
    }

    /// Lowercase name, used for storage file names.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = VocabError;

    /// Accepts either the numeric selection or the language name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(selection) = trimmed.parse::<u32>() {
            return Language::from_selection(selection);
        }
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| VocabError::UnsupportedLanguage {
                selection: trimmed.to_string(),
            })
    }
}
