//! Error types for vocabulary extraction.
//!
//! Errors abort the evaluation of the current entry and are handed back to
//! the caller untouched. Nothing in the pipeline retries.

use thiserror::Error;

use crate::Language;

/// Errors that can occur while configuring or running the pipeline.
#[derive(Debug, Error)]
pub enum VocabError {
    /// No model or rule set is configured for the requested language.
    #[error("unsupported language selection: {selection}")]
    UnsupportedLanguage { selection: String },

    /// A language configuration could not be parsed or validated.
    #[error("invalid {language} configuration: {message}")]
    Config { language: Language, message: String },

    /// Internal inconsistency while annotating or normalizing an entry.
    #[error("pipeline failure: {message}")]
    Pipeline { message: String },
}

impl VocabError {
    /// Shorthand for [`VocabError::Config`].
    pub fn config(language: Language, message: impl Into<String>) -> Self {
        VocabError::Config {
            language,
            message: message.into(),
        }
    }

    /// Shorthand for [`VocabError::Pipeline`].
    pub fn pipeline(message: impl Into<String>) -> Self {
        VocabError::Pipeline {
            message: message.into(),
        }
    }
}

/// Result type for vocabulary operations.
pub type VocabResult<T> = Result<T, VocabError>;
