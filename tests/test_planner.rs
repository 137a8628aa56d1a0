//! Tests for bundle planning

use interrogate::{AnswerSet, Question, plan_bundles};
use serde_json::json;

fn names(bundles: &[interrogate::Bundle]) -> Vec<Vec<&str>> {
    bundles.iter().map(|b| b.names().collect()).collect()
}

#[test]
fn test_all_static_questions_form_one_bundle() {
    let bundles = plan_bundles(vec![
        Question::input("a"),
        Question::input("b"),
        Question::input("c"),
    ]);
    assert_eq!(names(&bundles), vec![vec!["a", "b", "c"]]);
}

#[test]
fn test_each_dynamic_question_starts_a_bundle() {
    let bundles = plan_bundles(vec![
        Question::input("a"),
        Question::input("b").when(|_| true),
        Question::input("c"),
        Question::input("d").message_fn(|_| "D?".to_string()),
        Question::input("e").default_fn(|_| json!(1)),
        Question::list("f").choices_fn(|_| vec![json!("x")]),
        Question::input("g"),
    ]);
    assert_eq!(
        names(&bundles),
        vec![vec!["a"], vec!["b", "c"], vec!["d"], vec!["e"], vec!["f", "g"]]
    );
}

#[test]
fn test_first_question_always_starts_a_bundle() {
    let bundles = plan_bundles(vec![
        Question::input("a").when(|_| true),
        Question::input("b"),
    ]);
    assert_eq!(names(&bundles), vec![vec!["a", "b"]]);
}

#[test]
fn test_static_fields_do_not_split_bundles() {
    let bundles = plan_bundles(vec![
        Question::input("a").message("A?").default_value(3),
        Question::list("b").choices(["x", "y"]),
        Question::input("c").validate(|v: &serde_json::Value| v.is_number()),
    ]);
    assert_eq!(bundles.len(), 1);
}

#[test]
fn test_concatenation_reproduces_input_order() {
    let input: Vec<&str> = vec!["q1", "q2", "q3", "q4", "q5", "q6"];
    let questions = input.iter().enumerate().map(|(i, name)| {
        let question = Question::input(*name);
        if i % 2 == 1 {
            question.when(|answers: &AnswerSet| answers.is_empty())
        } else {
            question
        }
    });

    let flattened: Vec<String> = plan_bundles(questions)
        .into_iter()
        .flat_map(|bundle| bundle.into_iter().map(|q| q.name))
        .collect();
    assert_eq!(flattened, input);
}

#[test]
fn test_planning_is_idempotent() {
    let build = || {
        vec![
            Question::input("a"),
            Question::input("b").when(|_| true),
            Question::input("c"),
        ]
    };
    let first = names(&plan_bundles(build())).concat().join(",");
    let replanned: Vec<Question> = plan_bundles(build()).into_iter().flatten().collect();
    let second = names(&plan_bundles(replanned)).concat().join(",");

    assert_eq!(first, second);
    assert_eq!(
        names(&plan_bundles(build())),
        vec![vec!["a"], vec!["b", "c"]]
    );
}

#[test]
fn test_empty_input_yields_no_bundles() {
    assert!(plan_bundles(Vec::new()).is_empty());
}
