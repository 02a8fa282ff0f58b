use std::io;

use layered_vocab::VocabError;
use layered_vocab_store::StoreError;
use thiserror::Error;

/// Errors that end an interactive session.
#[derive(Debug, Error)]
pub enum CliError {
    /// The language prompt kept receiving invalid selections.
    #[error("no valid language selected after {attempts} attempts, giving up")]
    RetriesExceeded { attempts: usize },

    /// Standard input ended while a prompt was waiting for an answer.
    #[error("input ended before a language was selected")]
    InputClosed,

    #[error(transparent)]
    Vocab(#[from] VocabError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
