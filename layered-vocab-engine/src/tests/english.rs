use layered_vocab::{
    Engine, EvaluationDisplay, ExceptionSet, Language, LanguageConfig, SpanMembership,
    TokenizerSettings, VocabError,
};
use std::sync::Arc;

use super::{normalizer, vocabulary, vocabulary_with};
use crate::{builtin_normalizer, RuleEngine};

#[test]
fn pronouns_collapse_onto_earlier_forms() {
    let expected = ["he", "I", "we", "she", "they"];
    assert_eq!(
        vocabulary(Language::English, "he him me we she they us them I", &[]),
        expected
    );
    assert_eq!(
        vocabulary(Language::English, "He Him Me We She They Us Them I", &[]),
        expected
    );
}

#[test]
fn full_names_are_rejected() {
    let entry = "here's a proper noun: Sir Charles Noun.";
    assert_eq!(
        vocabulary(Language::English, entry, &[]),
        ["here", "be", "proper", "noun"]
    );
    assert_eq!(
        vocabulary(Language::English, entry, &["Charles", "Noun"]),
        ["here", "be", "proper", "noun", "Charles", "Noun"]
    );
}

#[test]
fn names_and_phone_numbers_in_one_entry() {
    assert_eq!(
        vocabulary(
            Language::English,
            "here's a proper noun: Sir Charles Noun. this is a phone number: +1 (123) 456-7890",
            &[]
        ),
        ["here", "be", "proper", "noun", "this", "phone", "number"]
    );
}

#[test]
fn phone_numbers_are_rejected_as_a_unit() {
    assert_eq!(
        vocabulary(Language::English, "call me at number 123-456-7890", &[]),
        ["call", "I", "at", "number"]
    );
}

#[test]
fn every_spaced_phone_format_is_rejected() {
    for entry in [
        "call 123-456-7890",
        "call +1 123-456-7890",
        "call 123 456-7890",
        "call +1 123 456-7890",
        "call (123) 456-7890",
        "call +1 (123) 456-7890",
    ] {
        assert_eq!(vocabulary(Language::English, entry, &[]), ["call"], "{}", entry);
    }
}

#[test]
fn compact_phone_format_leaks_under_exact_membership() {
    let engine = RuleEngine::builtin(Language::English).unwrap();
    let doc = engine.annotate("call (123)-456-7890").unwrap();
    let matches = engine.find_matches(&doc).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].rule_key, "US_PUNCTUATED_COMPACT");
    assert_eq!(matches[0].matched_text, "(123)-456-7890");

    assert_eq!(
        vocabulary(Language::English, "call (123)-456-7890", &[]),
        ["call"]
    );
    assert_eq!(
        vocabulary_with(
            Language::English,
            SpanMembership::Token,
            "call (123)-456-7890",
            &[]
        ),
        ["call", "123", "456-7890"]
    );
}

#[test]
fn phone_parts_can_be_excepted() {
    assert_eq!(
        vocabulary(
            Language::English,
            "this is a phone number: +1 (123) 456-7890",
            &["+1", "(123)", "456-7890"]
        ),
        ["this", "be", "a", "phone", "number", "+1", "(123)", "456-7890"]
    );
}

#[test]
fn excepted_full_name_is_restored() {
    let entry = "this is a proper noun: Micah Norwood";
    assert_eq!(
        vocabulary(Language::English, entry, &["Micah", "Norwood"]),
        ["this", "be", "proper", "noun", "Micah", "Norwood"]
    );
    assert_eq!(
        vocabulary(Language::English, entry, &[]),
        ["this", "be", "proper", "noun"]
    );

    let normalizer = builtin_normalizer(Language::English).unwrap();
    let exceptions: ExceptionSet = ["Micah", "Norwood"].into_iter().collect();
    assert_eq!(
        normalizer.normalize(entry, &exceptions).unwrap().tokens(),
        ["this", "be", "proper", "noun", "Micah", "Norwood"]
    );
}

#[test]
fn exact_membership_keeps_words_found_inside_names() {
    let entry = "this is a proper noun: Micah Norwood";
    assert_eq!(
        vocabulary_with(
            Language::English,
            SpanMembership::Token,
            entry,
            &["Micah", "Norwood"]
        ),
        ["this", "be", "a", "proper", "noun", "Micah", "Norwood"]
    );
    assert_eq!(
        vocabulary_with(Language::English, SpanMembership::Token, entry, &[]),
        ["this", "be", "a", "proper", "noun"]
    );
}

#[test]
fn contractions_resolve_to_full_words() {
    assert_eq!(
        vocabulary(Language::English, "Don't won't can't isn't I'll they'll", &[]),
        ["do", "not", "will", "can", "be", "I", "they"]
    );
}

#[test]
fn quoted_speech() {
    assert_eq!(
        vocabulary(
            Language::English,
            "...And I told him: 'Don't mess with me. I'll kick your butt!'",
            &[]
        ),
        ["and", "I", "tell", "he", "do", "not", "mess", "with", "will", "kick", "your", "butt"]
    );
}

#[test]
fn longer_entry() {
    let entry = "Let's eat at the high-society Big Boy Diner; it's where the New York Giants ate after their last victory.";
    insta::assert_debug_snapshot!(vocabulary(Language::English, entry, &[]), @r###"
    [
        "let",
        "us",
        "eat",
        "at",
        "the",
        "high",
        "society",
        "it",
        "be",
        "where",
        "after",
        "their",
        "last",
        "victory",
    ]
    "###);
}

#[test]
fn evaluation_display() {
    let evaluation = builtin_normalizer(Language::English)
        .unwrap()
        .evaluate("call me at number 123-456-7890", &ExceptionSet::new())
        .unwrap();

    let display = EvaluationDisplay::new(&evaluation)
        .with_decisions()
        .with_matches();

    insta::assert_snapshot!(display, @r###"
    call  me  at  number  123-456-7890
    ╰──╯accepted call
          ╰╯accepted I
              ╰╯accepted at
                  ╰────╯accepted number
                          ╰──────────╯rejected pattern
                          ╰──────────╯US_CONVENTIONAL
    "###);
}

#[test]
fn annotation_is_deterministic() {
    let engine = RuleEngine::builtin(Language::English).unwrap();
    let entry = "I walked the dogs  to the park, then I drank coffee.";
    let first = engine.annotate(entry).unwrap();
    let second = engine.annotate(entry).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.text(), entry);
    assert_eq!(first.span_text(layered_vocab::SpanRef::new(2, 4)), Some("the dogs  to"));

    let normalizer = normalizer(Language::English, SpanMembership::Token);
    assert_eq!(
        normalizer.normalize(entry, &ExceptionSet::new()).unwrap(),
        normalizer.normalize(entry, &ExceptionSet::new()).unwrap()
    );
}

#[test]
fn empty_entries_add_nothing() {
    assert!(vocabulary(Language::English, "", &[]).is_empty());
    assert!(vocabulary(Language::English, " ... !? ", &[]).is_empty());
}

#[test]
fn invalid_tokenizer_settings_fail_construction() {
    let config = LanguageConfig {
        tokenizer: TokenizerSettings {
            extra_infixes: vec!["[".to_string()],
        },
        ..LanguageConfig::empty(Language::English)
    };
    let err = RuleEngine::new(Arc::new(config)).unwrap_err();
    assert!(matches!(err, VocabError::Config { .. }));
}
