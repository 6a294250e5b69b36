// Integration tests for the word-scramble crate
// These tests drive the public API the way the binary does

use std::io::Cursor;
use word_scramble::cli::CliInterface;
use word_scramble::*;

fn scenario_dictionary() -> WordListDictionary {
    WordListDictionary::new("en", ["bad", "cab"])
}

fn engine_for(root: &str) -> ValidationEngine<WordListDictionary> {
    ValidationEngine::new(RootWord::new(root).unwrap(), scenario_dictionary())
}

#[test]
fn test_round_walkthrough() {
    let mut engine = engine_for("cabbage");

    assert_eq!(
        engine.submit("bad"),
        Outcome::Rejected(RejectReason::LettersNotAvailable)
    );

    assert_eq!(engine.submit("cab"), Outcome::Accepted);
    assert_eq!(engine.score(), 1);
    assert_eq!(engine.history(), ["cab"]);

    assert_eq!(engine.submit("cab"), Outcome::Rejected(RejectReason::AlreadyUsed));

    assert_eq!(engine.submit("ca"), Outcome::Rejected(RejectReason::NotARealWord));

    engine.reset(RootWord::new("newroot").unwrap());
    assert!(engine.history().is_empty());
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.root().as_str(), "newroot");
}

#[test]
fn test_root_word_cannot_be_submitted() {
    let mut engine = engine_for("cab");
    assert_eq!(engine.submit("cab"), Outcome::Rejected(RejectReason::SameAsRoot));
    assert_eq!(engine.submit(" Cab "), Outcome::Rejected(RejectReason::SameAsRoot));
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_case_varied_duplicate_is_already_used() {
    let mut engine = engine_for("cabbage");
    assert_eq!(engine.submit("CAB"), Outcome::Accepted);
    assert_eq!(engine.submit("cAb"), Outcome::Rejected(RejectReason::AlreadyUsed));
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn test_dictionary_language_must_match() {
    let mut engine = engine_for("cabbage").with_language("fr");
    assert_eq!(engine.submit("cab"), Outcome::Rejected(RejectReason::NotARealWord));
}

#[test]
fn test_selector_feeds_engine_from_embedded_list() {
    let word_list = load_word_list_from_str(EMBEDDED_WORD_LIST);
    let mut selector = RootWordSelector::from_seed(2024);

    let root = selector.select_root(&word_list);
    assert!(word_list.contains(&root.as_str().to_string()));

    let mut engine = ValidationEngine::new(root.clone(), |_: &str, _: &str| true);
    assert_eq!(
        engine.submit(root.as_str()),
        Outcome::Rejected(RejectReason::SameAsRoot)
    );
}

#[test]
fn test_cli_game_end_to_end() {
    let word_list = vec!["cabbage".to_string()];
    let mut selector = RootWordSelector::from_seed(1);
    let root = selector.select_root(&word_list);
    let mut engine = ValidationEngine::new(root, scenario_dictionary());

    let input = "bad\ncab\n  CAB \n\nca\n:new\ncab\n:quit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    let summary = game_loop(&word_list, &mut selector, &mut engine, &mut interface);

    assert_eq!(summary.rounds_started, 2);
    assert_eq!(summary.words_accepted, 2);
    assert_eq!(summary.final_score, 1);
    assert_eq!(engine.history(), ["cab"]);
}

#[test]
fn test_cli_game_stops_at_end_of_input() {
    let word_list = vec!["cabbage".to_string()];
    let mut selector = RootWordSelector::from_seed(1);
    let mut engine = ValidationEngine::new(selector.select_root(&word_list), scenario_dictionary());
    let mut interface = CliInterface::new(Cursor::new("cab\n"));

    let summary = game_loop(&word_list, &mut selector, &mut engine, &mut interface);

    assert_eq!(summary.final_score, 1);
    assert_eq!(summary.rounds_started, 1);
}

#[test]
fn test_word_list_file_to_game() {
    use std::fs;

    let path = std::env::temp_dir().join("word_scramble_integration_start.txt");
    fs::write(&path, "\n\nCabbage\n\n").unwrap();

    let word_list = load_word_list_from_file(&path).unwrap();
    let mut selector = RootWordSelector::new();
    assert_eq!(selector.select_root(&word_list).as_str(), "cabbage");

    let _ = fs::remove_file(&path);
}

#[test]
fn test_possibility_matches_letter_counts() {
    assert!(is_possible("aab", "aabbc"));
    assert!(!is_possible("aaa", "aabbc"));
    assert!(is_possible("silk", "silkworm"));
    assert!(!is_possible("silks", "silkworm"));
}
