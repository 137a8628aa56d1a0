//! Per-question logic shared by the socket and terminal paths
//!
//! - [`validator`] - Apply `validate` and `filter` to an incoming answer
//! - [`planner`] - Group questions into bundles for one-shot exchanges
//! - [`loader`] - Read static question definitions from JSON

pub mod loader;
pub mod planner;
pub mod validator;

pub use loader::{load_questions, parse_questions};
pub use planner::{Bundle, plan_bundles};
pub use validator::{Rejection, validate_answer};

use crate::types::{AnswerSet, Question};

/// Get a question ready to send
///
/// Returns `None` when its `when` predicate is false for `answers`; otherwise
/// resolves its computed fields against `answers` and hands it back.
#[must_use]
pub fn prepare(mut question: Question, answers: &AnswerSet) -> Option<Question> {
    if !question.should_ask(answers) {
        log::debug!("Skipping '{}': when() returned false", question.name);
        return None;
    }
    question.resolve(answers);
    Some(question)
}
