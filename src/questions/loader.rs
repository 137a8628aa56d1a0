//! Loading static question definitions

use std::path::Path;

use serde_json::Value;

use crate::error::{PromptError, Result};
use crate::types::Question;

/// Parse questions from JSON text
///
/// Accepts either an array of question objects or a single object.
///
/// # Errors
/// Returns `InvalidConfig` for malformed JSON, unknown shapes, or duplicate names
pub fn parse_questions(json: &str) -> Result<Vec<Question>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| PromptError::invalid_config(format!("Questions are not valid JSON: {e}")))?;

    let questions: Vec<Question> = match value {
        Value::Array(_) => serde_json::from_value(value),
        Value::Object(_) => serde_json::from_value(value).map(|q| vec![q]),
        other => {
            return Err(PromptError::invalid_config(format!(
                "Expected a question object or array, got {other}"
            )));
        }
    }
    .map_err(|e| PromptError::invalid_config(format!("Invalid question definition: {e}")))?;

    let mut seen = std::collections::HashSet::new();
    for question in &questions {
        if !seen.insert(question.name.as_str()) {
            return Err(PromptError::invalid_config(format!(
                "Duplicate question name: {}",
                question.name
            )));
        }
    }

    Ok(questions)
}

/// Read questions from a JSON file
///
/// # Errors
/// Returns an I/O error if the file cannot be read, or see [`parse_questions`]
pub fn load_questions(path: impl AsRef<Path>) -> Result<Vec<Question>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    log::debug!("Loaded questions from {}", path.display());
    parse_questions(&text)
}
