//! Per-language configuration: rejection patterns, override tables and
//! tokenizer settings.
//!
//! Configuration is written in TOML and loaded once per language. The
//! built-in files live in `config/` and are embedded in the crate.
//!
//! ```toml
//! [rejection]
//! membership = "token"
//!
//! [patterns.PROPER_NOUNS]
//! FULL_NAME = [{ pos = "PROPN" }, { pos = "PROPN" }]
//!
//! [overrides.PRONOUNS]
//! him = "he"
//! Him = "he"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::{Language, PartOfSpeech, VocabError, VocabResult};

const ENGLISH_TOML: &str = include_str!("../config/english.toml");
const SPANISH_TOML: &str = include_str!("../config/spanish.toml");

static ENGLISH: OnceCell<Arc<LanguageConfig>> = OnceCell::new();
static SPANISH: OnceCell<Arc<LanguageConfig>> = OnceCell::new();

/// How a token is tested against the strings of the rejection set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanMembership {
    /// The lemma or surface must equal one of the rejection strings.
    #[default]
    Token,
    /// The lemma or surface must occur inside one of the rejection strings.
    ///
    /// Legacy journal behaviour: short words such as `a` are rejected
    /// whenever they appear inside a matched name such as `Micah`.
    Contains,
}

/// What a single pattern position requires of its token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Part-of-speech tag equals the given tag
    PartOfSpeech(PartOfSpeech),
    /// Surface text equals the given text exactly
    Text(String),
    /// Token shape equals the given shape, e.g. `ddd`
    Shape(String),
}

/// One position of a pattern rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenConstraint {
    pub kind: ConstraintKind,
    /// Optional positions may be skipped when matching
    pub optional: bool,
}

impl TokenConstraint {
    pub fn pos(pos: PartOfSpeech) -> Self {
        Self {
            kind: ConstraintKind::PartOfSpeech(pos),
            optional: false,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: ConstraintKind::Text(text.into()),
            optional: false,
        }
    }

    pub fn shape(shape: impl Into<String>) -> Self {
        Self {
            kind: ConstraintKind::Shape(shape.into()),
            optional: false,
        }
    }

    /// Mark this position as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Named groups of named rules, each an ordered sequence of position constraints.
///
/// Groups and rules iterate in lexicographic order of their names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectionPatternConfiguration {
    groups: BTreeMap<String, BTreeMap<String, Vec<TokenConstraint>>>,
}

impl RejectionPatternConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, replacing any rule with the same group and key.
    pub fn with_rule(
        mut self,
        group: impl Into<String>,
        rule_key: impl Into<String>,
        constraints: Vec<TokenConstraint>,
    ) -> Self {
        self.groups
            .entry(group.into())
            .or_default()
            .insert(rule_key.into(), constraints);
        self
    }

    /// Iterate `(group, rule_key, constraints)` in name order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &str, &[TokenConstraint])> {
        self.groups.iter().flat_map(|(group, rules)| {
            rules
                .iter()
                .map(move |(key, constraints)| (group.as_str(), key.as_str(), constraints.as_slice()))
        })
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn rule_count(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rule_count() == 0
    }

    fn validate(&self, language: Language) -> VocabResult<()> {
        for (group, key, constraints) in self.rules() {
            if constraints.is_empty() {
                return Err(VocabError::config(
                    language,
                    format!("rule {}.{} has no positions", group, key),
                ));
            }
            if constraints.iter().all(|c| c.optional) {
                return Err(VocabError::config(
                    language,
                    format!("rule {}.{} has only optional positions", group, key),
                ));
            }
            for constraint in constraints {
                let empty = match &constraint.kind {
                    ConstraintKind::Text(text) => text.is_empty(),
                    ConstraintKind::Shape(shape) => shape.is_empty(),
                    ConstraintKind::PartOfSpeech(_) => false,
                };
                if empty {
                    return Err(VocabError::config(
                        language,
                        format!("rule {}.{} has an empty text or shape", group, key),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Corrections for surface forms the engine lemmatizes wrongly.
///
/// Lookup is by exact surface text, so every key must be present in both its
/// lowercase and its capitalized variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    groups: BTreeMap<String, BTreeMap<String, String>>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a correction, replacing any previous one for the same key in the group.
    pub fn with_entry(
        mut self,
        group: impl Into<String>,
        surface: impl Into<String>,
        correction: impl Into<String>,
    ) -> Self {
        self.groups
            .entry(group.into())
            .or_default()
            .insert(surface.into(), correction.into());
        self
    }

    /// Find the correction for `surface`.
    ///
    /// Groups are searched in lexicographic order of their names and the
    /// first group holding the key wins. Returns `(group, correction)`.
    pub fn lookup(&self, surface: &str) -> Option<(&str, &str)> {
        self.groups.iter().find_map(|(group, entries)| {
            entries
                .get(surface)
                .map(|correction| (group.as_str(), correction.as_str()))
        })
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn validate(&self, language: Language) -> VocabResult<()> {
        for (group, entries) in &self.groups {
            for (surface, correction) in entries {
                if surface.is_empty() || correction.is_empty() {
                    return Err(VocabError::config(
                        language,
                        format!("override group {} has an empty entry", group),
                    ));
                }
                for variant in [lowercase_first(surface), capitalize_first(surface)] {
                    if !entries.contains_key(&variant) {
                        return Err(VocabError::config(
                            language,
                            format!(
                                "override group {} has {:?} but is missing its case variant {:?}",
                                group, surface, variant
                            ),
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Tokenizer settings handed to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenizerSettings {
    /// Extra regular expressions whose matches split a word into separate tokens
    #[serde(default)]
    pub extra_infixes: Vec<String>,
}

/// Everything configured for one language. Immutable once built; share it
/// through an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    pub language: Language,
    pub membership: SpanMembership,
    pub patterns: RejectionPatternConfiguration,
    pub overrides: OverrideTable,
    pub tokenizer: TokenizerSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRejection {
    #[serde(default)]
    membership: SpanMembership,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConstraint {
    pos: Option<PartOfSpeech>,
    text: Option<String>,
    shape: Option<String>,
    #[serde(default)]
    optional: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLanguageConfig {
    #[serde(default)]
    rejection: RawRejection,
    #[serde(default)]
    patterns: BTreeMap<String, BTreeMap<String, Vec<RawConstraint>>>,
    #[serde(default)]
    overrides: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default)]
    tokenizer: TokenizerSettings,
}

impl RawConstraint {
    fn into_constraint(self, language: Language, group: &str, key: &str) -> VocabResult<TokenConstraint> {
        let kind = match (self.pos, self.text, self.shape) {
            (Some(pos), None, None) => ConstraintKind::PartOfSpeech(pos),
            (None, Some(text), None) => ConstraintKind::Text(text),
            (None, None, Some(shape)) => ConstraintKind::Shape(shape),
            _ => {
                return Err(VocabError::config(
                    language,
                    format!(
                        "rule {}.{}: each position needs exactly one of pos, text or shape",
                        group, key
                    ),
                ))
            }
        };
        Ok(TokenConstraint {
            kind,
            optional: self.optional,
        })
    }
}

impl LanguageConfig {
    /// A configuration with no patterns, no overrides and default settings.
    pub fn empty(language: Language) -> Self {
        Self {
            language,
            membership: SpanMembership::default(),
            patterns: RejectionPatternConfiguration::default(),
            overrides: OverrideTable::default(),
            tokenizer: TokenizerSettings::default(),
        }
    }

    /// The embedded configuration for `language`, parsed on first use.
    pub fn builtin(language: Language) -> VocabResult<Arc<LanguageConfig>> {
        let (cell, source) = match language {
            Language::English => (&ENGLISH, ENGLISH_TOML),
            Language::Spanish => (&SPANISH, SPANISH_TOML),
        };
        cell.get_or_try_init(|| LanguageConfig::from_toml_str(language, source).map(Arc::new))
            .map(Arc::clone)
    }

    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(language: Language, source: &str) -> VocabResult<Self> {
        let raw: RawLanguageConfig =
            toml::from_str(source).map_err(|e| VocabError::config(language, e.to_string()))?;

        let mut patterns = RejectionPatternConfiguration::default();
        for (group, rules) in raw.patterns {
            for (key, positions) in rules {
                let constraints = positions
                    .into_iter()
                    .map(|raw| raw.into_constraint(language, &group, &key))
                    .collect::<VocabResult<Vec<_>>>()?;
                patterns = patterns.with_rule(group.clone(), key, constraints);
            }
        }

        let config = Self {
            language,
            membership: raw.rejection.membership,
            patterns,
            overrides: OverrideTable { groups: raw.overrides },
            tokenizer: raw.tokenizer,
        };
        config.validate()?;

        tracing::debug!(
            %language,
            rules = config.patterns.rule_count(),
            overrides = config.overrides.len(),
            "loaded language configuration"
        );
        Ok(config)
    }

    /// Read a configuration file from disk.
    pub fn load(language: Language, path: &Path) -> VocabResult<Self> {
        let source = fs::read_to_string(path).map_err(|e| {
            VocabError::config(language, format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(language, &source)
    }

    pub fn with_membership(mut self, membership: SpanMembership) -> Self {
        self.membership = membership;
        self
    }

    pub fn with_patterns(mut self, patterns: RejectionPatternConfiguration) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn with_overrides(mut self, overrides: OverrideTable) -> Self {
        self.overrides = overrides;
        self
    }

    /// Check rule and override invariants.
    pub fn validate(&self) -> VocabResult<()> {
        self.patterns.validate(self.language)?;
        self.overrides.validate(self.language)
    }
}
