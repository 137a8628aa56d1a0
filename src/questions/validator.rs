//! Validation and filtering of answers

use serde_json::Value;

use crate::error::PromptError;
use crate::types::{Question, Verdict};

/// An answer refused by a question's validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Name of the question
    pub name: String,
    /// Message to report back
    pub reason: String,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.reason)
    }
}

impl From<Rejection> for PromptError {
    fn from(rejection: Rejection) -> Self {
        Self::validation(rejection.name, rejection.reason)
    }
}

/// Validate `raw` against `question`, then filter it
///
/// Only [`Verdict::Valid`] accepts. A rejection carries the validator's
/// message, or `invalid value for <name>` when it gave none (or an empty one).
/// On acceptance the value returned is the filtered answer, which is what
/// callers must store.
///
/// # Errors
/// Returns the [`Rejection`] when the validator refuses the answer
pub fn validate_answer(question: &Question, raw: Value) -> Result<Value, Rejection> {
    if let Some(ref validate) = question.validate
        && let Verdict::Invalid(reason) = validate(&raw)
    {
        let reason = reason
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| format!("invalid value for {}", question.name));
        return Err(Rejection {
            name: question.name.clone(),
            reason,
        });
    }

    Ok(match question.filter {
        Some(ref filter) => filter(raw),
        None => raw,
    })
}
