//! Grammar file writing tests

mod common;

use common::{grammar_for, python};
use tagged_grammar::output::{is_up_to_date, read_grammar, to_json_string, write_grammar};
use tagged_grammar::LanguageSpec;

#[test]
fn test_write_then_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grammar.json");
    let doc = grammar_for(vec![python()]);

    write_grammar(&path, &doc).unwrap();
    assert_eq!(read_grammar(&path).unwrap(), doc);
}

#[test]
fn test_write_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("syntaxes").join("grammar.json");

    write_grammar(&path, &grammar_for(vec![python()])).unwrap();
    assert!(path.exists());
}

#[test]
fn test_write_overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grammar.json");
    std::fs::write(&path, "stale").unwrap();

    let doc = grammar_for(vec![python()]);
    write_grammar(&path, &doc).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        to_json_string(&doc).unwrap()
    );
}

#[test]
fn test_write_to_unwritable_destination_fails() {
    let dir = tempfile::tempdir().unwrap();
    // A file where the parent directory should be
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let result = write_grammar(&blocker.join("grammar.json"), &grammar_for(vec![python()]));
    assert!(result.is_err());
}

#[test]
fn test_up_to_date_detection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grammar.json");
    let doc = grammar_for(vec![python()]);

    assert!(!is_up_to_date(&path, &doc).unwrap(), "missing file is stale");

    write_grammar(&path, &doc).unwrap();
    assert!(is_up_to_date(&path, &doc).unwrap());

    let changed = grammar_for(vec![
        python(),
        LanguageSpec::new("sql", &["sql"], "source.sql"),
    ]);
    assert!(!is_up_to_date(&path, &changed).unwrap());
}

#[test]
fn test_json_uses_schema_keys() {
    let json = to_json_string(&grammar_for(vec![python()])).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["fileTypes"], serde_json::json!([]));
    assert!(value["injectionSelector"].is_string());
    assert!(value["patterns"].is_array());
    assert!(value["scopeName"].is_string());

    let rule = &value["repository"]["commentTaggedString-python"];
    assert_eq!(rule["contentName"], "meta.embedded.block.python");
    assert_eq!(rule["beginCaptures"]["2"]["name"], "comment.tag.python");
    assert_eq!(
        rule["patterns"][0]["patterns"][0]["include"],
        "source.python"
    );
}
