//! Tests for loading question definitions from JSON

use std::io::Write;

use interrogate::load_questions;
use interrogate::questions::parse_questions;
use serde_json::json;

#[test]
fn test_load_array_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"name": "project", "type": "input", "message": "Project name?", "default": "app"}},
            {{"name": "platform", "type": "list", "choices": ["ios", "android"], "pageSize": 4}}
        ]"#
    )
    .unwrap();

    let questions = load_questions(file.path()).unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].name, "project");
    assert_eq!(questions[0].display_message(), "Project name?");
    assert_eq!(questions[0].resolved_default(), Some(&json!("app")));
    assert_eq!(
        questions[1].to_wire(),
        json!({"name": "platform", "type": "list", "choices": ["ios", "android"], "pageSize": 4})
    );
    assert!(questions.iter().all(|q| !q.is_dynamic()));
}

#[test]
fn test_single_object_is_one_question() {
    let questions = parse_questions(r#"{"name": "ok", "type": "confirm"}"#).unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].kind.as_deref(), Some("confirm"));
}

#[test]
fn test_duplicate_names_are_rejected() {
    let err = parse_questions(r#"[{"name": "a"}, {"name": "a"}]"#).unwrap_err();
    assert!(err.to_string().contains("Duplicate question name: a"));
}

#[test]
fn test_missing_name_is_rejected() {
    assert!(parse_questions(r#"[{"type": "input"}]"#).is_err());
}

#[test]
fn test_non_question_json_is_rejected() {
    assert!(parse_questions("42").is_err());
    assert!(parse_questions("not json").is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_questions(dir.path().join("absent.json")).is_err());
}
