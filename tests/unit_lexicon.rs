// Unit tests for the lexicon matcher: case folding, substring semantics,
// lexicon ordering, and the JSON file loader's option validation.

use std::io::Write;

use gatepost::lexicon::Lexicon;

#[test]
fn matches_come_back_in_lexicon_order() {
    let lex = Lexicon::builtin();
    let matches = lex.find_matches("you stupid fuck");
    // "stupid" precedes "fuck" in the profanity list, so it must come first
    // regardless of where each term sits in the text.
    let stupid = matches.iter().position(|t| t == "stupid").unwrap();
    let fuck = matches.iter().position(|t| t == "fuck").unwrap();
    assert!(stupid < fuck);
}

#[test]
fn case_folding_covers_mixed_case() {
    let lex = Lexicon::builtin();
    assert!(!lex.find_matches("StUpId").is_empty());
    assert!(!lex.find_matches("SUICIDE BOMBER").is_empty());
}

#[test]
fn duplicate_terms_are_tolerated() {
    // "terrorist" appears in the extremism list; even if a custom file lists
    // it twice, matching just reports it twice.
    let lex = Lexicon::builtin();
    let matches = lex.find_matches("terrorist");
    assert!(matches.iter().filter(|t| t.as_str() == "terrorist").count() >= 1);
}

#[test]
fn file_lexicon_replaces_builtin() {
    let path = std::env::temp_dir().join("gatepost_test_lexicon.json");
    let mut f = std::fs::File::create(&path).unwrap();
    write!(
        f,
        r#"{{"case_sensitivity": "off", "match_mode": "substring", "terms": ["Banana", "split"]}}"#
    )
    .unwrap();

    let lex = Lexicon::from_file(&path).unwrap();
    assert_eq!(lex.len(), 2);
    // Terms are folded at load time, so "Banana" matches "banana bread".
    assert_eq!(lex.find_matches("banana bread"), vec!["banana"]);
    // Built-in terms are gone.
    assert!(lex.find_matches("you are stupid").is_empty());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn unrecognized_match_mode_is_a_startup_error() {
    let path = std::env::temp_dir().join("gatepost_test_lexicon_badmode.json");
    std::fs::write(
        &path,
        r#"{"case_sensitivity": "off", "match_mode": "whole_word", "terms": ["x"]}"#,
    )
    .unwrap();

    let err = Lexicon::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("match_mode"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn unrecognized_case_sensitivity_is_a_startup_error() {
    let path = std::env::temp_dir().join("gatepost_test_lexicon_badcase.json");
    std::fs::write(
        &path,
        r#"{"case_sensitivity": "on", "match_mode": "substring", "terms": ["x"]}"#,
    )
    .unwrap();

    let err = Lexicon::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("case_sensitivity"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn options_default_when_omitted() {
    let path = std::env::temp_dir().join("gatepost_test_lexicon_defaults.json");
    std::fs::write(&path, r#"{"terms": ["alpha"]}"#).unwrap();

    let lex = Lexicon::from_file(&path).unwrap();
    assert_eq!(lex.find_matches("ALPHAbet"), vec!["alpha"]);

    let _ = std::fs::remove_file(&path);
}
