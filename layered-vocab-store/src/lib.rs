#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Persistent per-language token indexes for layered-vocab.
//!
//! Each language has one plain text file, `<dir>/<language>-tokens.txt`,
//! holding one normalized token per line in the order tokens were first
//! indexed. Files are only ever appended to.
//!
//! ```
//! use layered_vocab::Language;
//! use layered_vocab_store::VocabularyStore;
//!
//! let dir = std::env::temp_dir().join("layered-vocab-store-doctest");
//! # let _ = std::fs::remove_dir_all(&dir);
//! let store = VocabularyStore::new(&dir);
//! let index = store.open(Language::Spanish).unwrap();
//! assert!(index.tokens().is_empty());
//! assert!(store.path_for(Language::Spanish).ends_with("spanish-tokens.txt"));
//! # std::fs::remove_dir_all(&dir).unwrap();
//! ```

mod errors;
mod index;

pub use errors::{StoreError, StoreResult};
pub use index::LanguageIndex;

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use layered_vocab::Language;

/// Directory holding one index file per language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyStore {
    dir: PathBuf,
}

impl VocabularyStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the index file for `language`.
    pub fn path_for(&self, language: Language) -> PathBuf {
        self.dir.join(format!("{}-tokens.txt", language.name()))
    }

    /// Read the indexed tokens of `language`. A language that was never
    /// indexed has no tokens.
    pub fn load(&self, language: Language) -> StoreResult<Vec<String>> {
        let path = self.path_for(language);
        match fs::read_to_string(&path) {
            Ok(content) => index::parse_index(&path, &content),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(StoreError::io(&path, err)),
        }
    }

    /// Open the index of `language` for appending, creating an empty index
    /// file when there is none yet.
    pub fn open(&self, language: Language) -> StoreResult<LanguageIndex> {
        let path = self.path_for(language);

        if !path.is_file() {
            fs::create_dir_all(&self.dir).map_err(|err| StoreError::io(&self.dir, err))?;
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(_) => tracing::info!(path = %path.display(), "created token index"),
                Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                    return Err(StoreError::inconsistent(
                        &path,
                        "index file appeared while it was being created",
                    ));
                }
                Err(err) => return Err(StoreError::io(&path, err)),
            }
        }

        LanguageIndex::read(language, path)
    }
}
