use layered_vocab::{Engine, Language};

use super::vocabulary;
use crate::RuleEngine;

#[test]
fn object_pronouns_and_names() {
    assert_eq!(
        vocabulary(Language::Spanish, "Me llamo Ana García y vivo en Madrid.", &[]),
        ["yo", "llamar", "y", "vivir", "en", "Madrid"]
    );
    assert_eq!(
        vocabulary(
            Language::Spanish,
            "Me llamo Ana García y vivo en Madrid.",
            &["Ana", "García"]
        ),
        ["yo", "llamar", "Ana", "García", "y", "vivir", "en", "Madrid"]
    );
}

#[test]
fn phone_numbers() {
    assert_eq!(
        vocabulary(Language::Spanish, "llámame al 612 345 678", &[]),
        ["llámame", "al"]
    );
    assert_eq!(
        vocabulary(Language::Spanish, "mi número es +34 612 34 56 78", &[]),
        ["mi", "número", "ser"]
    );
}

#[test]
fn questions_keep_inverted_marks_out() {
    let engine = RuleEngine::builtin(Language::Spanish).unwrap();
    let doc = engine.annotate("¿Dónde está tu casa?").unwrap();
    let surfaces: Vec<_> = doc.tokens().iter().map(|t| t.surface_text.as_str()).collect();
    assert_eq!(surfaces, ["¿", "Dónde", "está", "tu", "casa", "?"]);

    assert_eq!(
        vocabulary(Language::Spanish, "¿Dónde está tu casa?", &[]),
        ["dónde", "estar", "tu", "casa"]
    );
}
