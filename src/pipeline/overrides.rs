use crate::{AnnotatedToken, OverrideTable};

/// The normalized form chosen for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub normalized: &'a str,
    /// The override group that supplied `normalized`, if any
    pub group: Option<&'a str>,
}

/// Chooses each surviving token's normalized form: the override for its
/// surface text when there is one, its lemma otherwise.
#[derive(Debug, Clone, Copy)]
pub struct OverrideResolver<'a> {
    table: &'a OverrideTable,
}

impl<'a> OverrideResolver<'a> {
    pub fn new(table: &'a OverrideTable) -> Self {
        Self { table }
    }

    pub fn resolve<'t>(&self, token: &'t AnnotatedToken) -> Resolution<'t>
    where
        'a: 't,
    {
        match self.table.lookup(&token.surface_text) {
            Some((group, correction)) => Resolution {
                normalized: correction,
                group: Some(group),
            },
            None => Resolution {
                normalized: &token.lemma,
                group: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PartOfSpeech;

    #[test]
    fn surface_overrides_beat_lemmas() {
        let table = OverrideTable::new()
            .with_entry("PRONOUNS", "him", "he")
            .with_entry("PRONOUNS", "Him", "he");
        let resolver = OverrideResolver::new(&table);

        let him = AnnotatedToken::new("Him", "him", PartOfSpeech::Pron);
        assert_eq!(
            resolver.resolve(&him),
            Resolution {
                normalized: "he",
                group: Some("PRONOUNS"),
            }
        );

        let ate = AnnotatedToken::new("ate", "eat", PartOfSpeech::Verb);
        assert_eq!(resolver.resolve(&ate).normalized, "eat");
        assert_eq!(resolver.resolve(&ate).group, None);
    }

    #[test]
    fn lookup_is_by_exact_surface() {
        let table = OverrideTable::new().with_entry("PRONOUNS", "us", "we");
        let resolver = OverrideResolver::new(&table);

        // lemma "us" with a different surface is left alone
        let clitic = AnnotatedToken::new("'s", "us", PartOfSpeech::Pron);
        assert_eq!(resolver.resolve(&clitic).normalized, "us");
    }
}
