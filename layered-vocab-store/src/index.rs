use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use layered_vocab::{Language, VocabularyDelta};

use crate::{StoreError, StoreResult};

/// An open token index for one language.
///
/// The file is read again before every append and must still hold exactly
/// the tokens this index knows about. Any other content is
/// [`StoreError::Inconsistent`], unless
/// [`accept_external_appends`](Self::accept_external_appends) allows tokens
/// appended by another writer, which are then adopted and never written
/// twice.
#[derive(Debug, Clone)]
pub struct LanguageIndex {
    language: Language,
    path: PathBuf,
    tokens: Vec<String>,
    seen: HashSet<String>,
    external_appends: bool,
}

impl LanguageIndex {
    pub(crate) fn read(language: Language, path: PathBuf) -> StoreResult<Self> {
        let content = read_existing(&path)?;
        let tokens = parse_index(&path, &content)?;
        tracing::debug!(
            language = %language,
            path = %path.display(),
            tokens = tokens.len(),
            "opened token index"
        );
        Ok(Self::with_tokens(language, path, tokens))
    }

    fn with_tokens(language: Language, path: PathBuf, tokens: Vec<String>) -> Self {
        let seen = tokens.iter().cloned().collect();
        Self {
            language,
            path,
            tokens,
            seen,
            external_appends: false,
        }
    }

    /// Adopt tokens another writer appended since this index last read the
    /// file. Files rewritten in any other way still fail.
    pub fn accept_external_appends(mut self) -> Self {
        self.external_appends = true;
        self
    }

    /// Replace the in-memory view with the current file contents.
    pub fn reload(&mut self) -> StoreResult<()> {
        let content = read_existing(&self.path)?;
        let tokens = parse_index(&self.path, &content)?;
        self.seen = tokens.iter().cloned().collect();
        self.tokens = tokens;
        Ok(())
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Indexed tokens in the order they were first indexed.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn contains(&self, token: &str) -> bool {
        self.seen.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Append the tokens of `delta` that are not indexed yet, returning
    /// them in the order they were written.
    pub fn append(&mut self, delta: &VocabularyDelta) -> StoreResult<Vec<String>> {
        if let Some(token) = delta.iter().find(|token| !is_storable(token)) {
            return Err(StoreError::InvalidToken {
                token: token.to_string(),
            });
        }

        let content = read_existing(&self.path)?;
        let on_disk = parse_index(&self.path, &content)?;
        if on_disk != self.tokens {
            if !(self.external_appends && on_disk.starts_with(&self.tokens)) {
                return Err(StoreError::inconsistent(
                    &self.path,
                    format!(
                        "expected {} tokens on disk, found {} that do not match",
                        self.tokens.len(),
                        on_disk.len()
                    ),
                ));
            }
            tracing::warn!(
                path = %self.path.display(),
                expected = self.tokens.len(),
                found = on_disk.len(),
                "adopting tokens appended by another writer"
            );
            for token in &on_disk[self.tokens.len()..] {
                self.seen.insert(token.clone());
            }
            self.tokens = on_disk;
        }

        let appended: Vec<String> = delta
            .iter()
            .filter(|token| !self.seen.contains(*token))
            .map(str::to_string)
            .collect();
        if appended.is_empty() {
            return Ok(appended);
        }

        let mut lines = String::new();
        for token in &appended {
            lines.push_str(token);
            lines.push('\n');
        }

        let mut file = match OpenOptions::new().append(true).open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(vanished(&self.path));
            }
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };
        file.write_all(lines.as_bytes())
            .map_err(|err| StoreError::io(&self.path, err))?;

        for token in &appended {
            self.seen.insert(token.clone());
            self.tokens.push(token.clone());
        }
        tracing::info!(
            language = %self.language,
            appended = appended.len(),
            total = self.tokens.len(),
            "updated token index"
        );
        Ok(appended)
    }
}

fn vanished(path: &Path) -> StoreError {
    StoreError::inconsistent(path, "index file vanished while it was open")
}

fn read_existing(path: &Path) -> StoreResult<String> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => vanished(path),
        _ => StoreError::io(path, err),
    })
}

fn is_storable(token: &str) -> bool {
    !token.trim().is_empty() && !token.contains(['\n', '\r'])
}

/// One token per line, each ending in a newline. Blank lines, repeated
/// tokens and a missing final newline mean the file was not written by this
/// store.
pub(crate) fn parse_index(path: &Path, content: &str) -> StoreResult<Vec<String>> {
    if !content.is_empty() && !content.ends_with('\n') {
        return Err(StoreError::inconsistent(path, "missing final newline"));
    }
    let mut tokens = Vec::new();
    let mut seen = HashSet::new();
    for (number, line) in content.lines().enumerate() {
        let number = number + 1;
        if line.trim().is_empty() {
            return Err(StoreError::inconsistent(
                path,
                format!("blank line {}", number),
            ));
        }
        if !seen.insert(line) {
            return Err(StoreError::inconsistent(
                path,
                format!("token {:?} repeated on line {}", line, number),
            ));
        }
        tokens.push(line.to_string());
    }
    Ok(tokens)
}
