use kasane_core::dictionary::{EntryError, EntryPolicy, LoadError};

use crate::dictionary::Meaning;
use crate::loader::LexiconLoader;

use super::init_tracing;

const DATASET: &str = r#"[
    {"kanji": ["食べる"], "kana": ["たべる"], "meaning": "to eat"},
    {"kana": ["はし"], "meaning": ["chopsticks", "edge"]},
    {"kanji": ["橋"], "kana": ["はし"], "meaning": "bridge"}
]"#;

#[test]
fn loads_string_and_array_meanings() {
    init_tracing();
    let lexicon = LexiconLoader::from_str(DATASET, EntryPolicy::Abort).expect("well-formed data");

    assert_eq!(lexicon.entry_count(), 3);
    let eat = lexicon.search("食べる").expect("kanji key");
    assert_eq!(eat.meaning, Meaning::One("to eat".to_string()));

    let chopsticks = lexicon.get(1).expect("position 1");
    assert_eq!(
        chopsticks.meaning,
        Meaning::Many(vec!["chopsticks".to_string(), "edge".to_string()])
    );
}

#[test]
fn missing_fields_become_empty_forms() {
    init_tracing();
    let lexicon =
        LexiconLoader::from_str(r#"[{"meaning": "orphan"}]"#, EntryPolicy::Abort).expect("valid");
    let orphan = lexicon.get(0).expect("position 0");
    assert!(orphan.kanji.is_empty());
    assert!(orphan.kana.is_empty());
}

#[test]
fn malformed_forms_abort_with_the_record_index() {
    init_tracing();
    let json = r#"[
        {"kanji": ["水"], "kana": ["みず"], "meaning": "water"},
        {"kanji": "火", "kana": ["ひ"], "meaning": "fire"}
    ]"#;

    let err = LexiconLoader::from_str(json, EntryPolicy::Abort).expect_err("malformed record");
    match err {
        LoadError::Entry(EntryError::MalformedForms { index, field }) => {
            assert_eq!(index, 1);
            assert_eq!(field, "kanji");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn skip_policy_keeps_the_valid_records() {
    init_tracing();
    let json = r#"[
        {"kanji": ["水"], "kana": ["みず"], "meaning": "water"},
        {"kanji": "火", "kana": ["ひ"], "meaning": "fire"},
        {"kanji": ["土"], "kana": ["つち"], "meaning": "earth"}
    ]"#;

    let lexicon = LexiconLoader::from_str(json, EntryPolicy::Skip).expect("skip policy");
    assert_eq!(lexicon.entry_count(), 2);
    assert!(lexicon.search("水").is_some());
    assert!(lexicon.search("土").is_some());
    assert!(lexicon.search("火").is_none());
}

#[test]
fn non_string_meaning_degrades_to_empty() {
    init_tracing();
    let lexicon = LexiconLoader::from_str(
        r#"[{"kanji": ["謎"], "kana": ["なぞ"], "meaning": 42}]"#,
        EntryPolicy::Abort,
    )
    .expect("form fields are well-formed");

    let entry = lexicon.search("謎").expect("still indexed");
    assert_eq!(entry.meaning, Meaning::empty());
}

#[test]
fn top_level_garbage_is_a_parse_error() {
    init_tracing();
    let err = LexiconLoader::from_str("not json", EntryPolicy::Abort).expect_err("garbage input");
    assert!(matches!(err, LoadError::Parse(_)));
}
