//! Part-of-speech tagging and lemmatization from the lexicon and a few
//! context rules.

use layered_vocab::{is_punctuation_text, AnnotatedToken, Language, PartOfSpeech, PartOfSpeech::*};

use crate::lexicon::{is_closed_class, Lexicon};

/// Tokens that may sit between a sentence end and the first word.
const OPENERS: &[&str] = &["\"", "'", "(", "[", "«", "“", "‘", "¿", "¡"];

const SENTENCE_FINAL: &[&str] = &[".", "!", "?", "…"];

/// Words after which `'s` is a form of "be" rather than a possessive.
const COPULA_HOSTS: &[&str] = &["here", "there", "that", "what", "where", "who", "how", "when", "why"];

/// Characters allowed in numeric tokens besides digits.
const NUMERIC_MARKS: &[char] = &['+', '-', '(', ')', '.', ','];

#[derive(Debug, Clone)]
pub(crate) struct Tagger {
    language: Language,
    lexicon: &'static Lexicon,
}

impl Tagger {
    pub(crate) fn new(language: Language) -> Self {
        Self {
            language,
            lexicon: Lexicon::for_language(language),
        }
    }

    pub(crate) fn tag(&self, surfaces: &[&str]) -> Vec<AnnotatedToken> {
        (0..surfaces.len())
            .map(|idx| {
                let (pos, lemma) = self.tag_one(surfaces, idx);
                AnnotatedToken::new(surfaces[idx], lemma, pos)
            })
            .collect()
    }

    fn tag_one(&self, surfaces: &[&str], idx: usize) -> (PartOfSpeech, String) {
        let surface = surfaces[idx];
        if is_punctuation_text(surface) {
            return (Punct, surface.to_string());
        }
        if surface.chars().any(char::is_numeric)
            && surface.chars().all(|c| c.is_numeric() || NUMERIC_MARKS.contains(&c))
        {
            return (Num, surface.to_string());
        }

        let lower = surface.to_lowercase().replace('’', "'");

        if self.language == Language::English && lower == "'s" {
            return self.tag_clitic_s(surfaces, idx);
        }

        let known = self.lexicon.lookup(&lower);
        let capitalized = surface.chars().next().map_or(false, char::is_uppercase);
        if capitalized {
            return match known {
                Some((pos, lemma)) if is_closed_class(pos) || is_sentence_initial(surfaces, idx) => {
                    (pos, lemma)
                }
                _ => (Propn, surface.to_string()),
            };
        }

        match known {
            Some(found) => found,
            None if surface.chars().all(char::is_alphabetic) => (Noun, lower),
            None => (X, lower),
        }
    }

    /// `Let's` → us, `it's` → be, `Charles's` → possessive.
    fn tag_clitic_s(&self, surfaces: &[&str], idx: usize) -> (PartOfSpeech, String) {
        let previous = idx.checked_sub(1).map(|prev| surfaces[prev].to_lowercase());
        match previous.as_deref() {
            Some("let") => (Pron, "us".to_string()),
            Some(host)
                if COPULA_HOSTS.contains(&host)
                    || matches!(self.lexicon.get(host), Some((Pron, _))) =>
            {
                (Aux, "be".to_string())
            }
            _ => (Part, "'s".to_string()),
        }
    }
}

fn is_sentence_initial(surfaces: &[&str], idx: usize) -> bool {
    surfaces[..idx]
        .iter()
        .rev()
        .find(|surface| !OPENERS.contains(*surface))
        .map_or(true, |previous| SENTENCE_FINAL.contains(previous))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(language: Language, surfaces: &[&str]) -> Vec<(PartOfSpeech, String)> {
        Tagger::new(language)
            .tag(surfaces)
            .into_iter()
            .map(|token| (token.part_of_speech, token.lemma))
            .collect()
    }

    fn tag(pos: PartOfSpeech, lemma: &str) -> (PartOfSpeech, String) {
        (pos, lemma.to_string())
    }

    #[test]
    fn capitalized_words_mid_sentence_are_proper_nouns() {
        assert_eq!(
            tags(Language::English, &["a", "noun", ":", "Sir", "Charles", "Noun", "."]),
            vec![
                tag(Det, "a"),
                tag(Noun, "noun"),
                tag(Punct, ":"),
                tag(Propn, "Sir"),
                tag(Propn, "Charles"),
                tag(Propn, "Noun"),
                tag(Punct, "."),
            ]
        );
    }

    #[test]
    fn sentence_initial_words_keep_their_class() {
        assert_eq!(
            tags(Language::English, &["This", "is", ".", "'", "Dogs", "ate"]),
            vec![
                tag(Det, "this"),
                tag(Aux, "be"),
                tag(Punct, "."),
                tag(Punct, "'"),
                tag(Noun, "dog"),
                tag(Verb, "eat"),
            ]
        );
        assert_eq!(tags(Language::English, &["Micah"]), vec![tag(Propn, "Micah")]);
    }

    #[test]
    fn capitalized_pronouns_stay_pronouns() {
        assert_eq!(
            tags(Language::English, &["He", "Him", "Us", "I"]),
            vec![
                tag(Pron, "he"),
                tag(Pron, "him"),
                tag(Pron, "us"),
                tag(Pron, "I"),
            ]
        );
    }

    #[test]
    fn clitic_s_reads_its_host() {
        assert_eq!(tags(Language::English, &["Let", "'s"])[1], tag(Pron, "us"));
        assert_eq!(tags(Language::English, &["it", "’s"])[1], tag(Aux, "be"));
        assert_eq!(tags(Language::English, &["here", "'s"])[1], tag(Aux, "be"));
        assert_eq!(tags(Language::English, &["Charles", "'s"])[1], tag(Part, "'s"));
    }

    #[test]
    fn numbers_and_unknown_words() {
        assert_eq!(
            tags(Language::English, &["+1", "(123)", "456-7890", "zorble", "b4"]),
            vec![
                tag(Num, "+1"),
                tag(Num, "(123)"),
                tag(Num, "456-7890"),
                tag(Noun, "zorble"),
                tag(X, "b4"),
            ]
        );
    }

    #[test]
    fn spanish_entries() {
        assert_eq!(
            tags(Language::Spanish, &["Me", "llamo", "Ana", "García", "y", "vivo", "en", "Madrid"]),
            vec![
                tag(Pron, "me"),
                tag(Verb, "llamar"),
                tag(Propn, "Ana"),
                tag(Propn, "García"),
                tag(Cconj, "y"),
                tag(Verb, "vivir"),
                tag(Adp, "en"),
                tag(Propn, "Madrid"),
            ]
        );
    }

    #[test]
    fn flags_come_from_the_surface() {
        let tokens = Tagger::new(Language::English).tag(&["wait", "!"]);
        assert!(tokens[0].is_alphabetic);
        assert!(tokens[1].is_punctuation);
    }
}
