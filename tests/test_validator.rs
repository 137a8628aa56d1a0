//! Tests for answer validation

use interrogate::{PromptError, Question, Verdict, validate_answer};
use serde_json::{Value, json};

#[test]
fn test_no_validator_accepts_anything() {
    let question = Question::input("a");
    assert_eq!(validate_answer(&question, json!(null)).unwrap(), json!(null));
    assert_eq!(validate_answer(&question, json!([1, 2])).unwrap(), json!([1, 2]));
}

#[test]
fn test_true_accepts() {
    let question = Question::input("a").validate(|_: &Value| true);
    assert_eq!(validate_answer(&question, json!("x")).unwrap(), json!("x"));
}

#[test]
fn test_false_rejects_with_default_reason() {
    let question = Question::input("port").validate(|_: &Value| false);
    let rejection = validate_answer(&question, json!(0)).unwrap_err();
    assert_eq!(rejection.name, "port");
    assert_eq!(rejection.reason, "invalid value for port");
}

#[test]
fn test_string_result_rejects_with_that_message() {
    let question = Question::input("port").validate(|_: &Value| "port is taken");
    let rejection = validate_answer(&question, json!(80)).unwrap_err();
    assert_eq!(rejection.reason, "port is taken");
}

#[test]
fn test_empty_message_falls_back_to_default_reason() {
    let question = Question::input("port").validate(|_: &Value| Verdict::invalid(""));
    let rejection = validate_answer(&question, json!(80)).unwrap_err();
    assert_eq!(rejection.reason, "invalid value for port");
}

#[test]
fn test_result_validator() {
    let question = Question::input("n").validate(|v: &Value| {
        if v.as_i64().is_some_and(|n| n > 0) {
            Ok(())
        } else {
            Err(format!("{v} is not positive"))
        }
    });
    assert!(validate_answer(&question, json!(5)).is_ok());
    assert_eq!(
        validate_answer(&question, json!(-5)).unwrap_err().reason,
        "-5 is not positive"
    );
}

#[test]
fn test_filter_runs_only_after_acceptance() {
    let question = Question::input("n")
        .validate(|v: &Value| v.is_number())
        .filter(|v| json!(v.as_i64().unwrap_or_default() * 10));

    assert_eq!(validate_answer(&question, json!(4)).unwrap(), json!(40));
    assert!(validate_answer(&question, json!("four")).is_err());
}

#[test]
fn test_rejection_converts_to_validation_error() {
    let question = Question::input("n").validate(|_: &Value| "nope");
    let err: PromptError = validate_answer(&question, json!(1)).unwrap_err().into();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "Validation error for 'n': nope");
}
