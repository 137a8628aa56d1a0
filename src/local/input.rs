//! Conversion of typed input into answer values

use serde_json::Value;

use crate::types::Question;

/// Text shown before the cursor
pub(super) fn render_prompt(question: &Question) -> String {
    let message = question.display_message();
    if question.kind.as_deref() == Some("confirm") {
        let hint = match question.resolved_default() {
            Some(Value::Bool(false)) => "y/N",
            _ => "Y/n",
        };
        return format!("? {message} ({hint}) ");
    }
    match question.resolved_default() {
        Some(Value::String(s)) if !s.is_empty() => format!("? {message} ({s}) "),
        Some(Value::Null) | Some(Value::String(_)) | None => format!("? {message} "),
        Some(other) => format!("? {message} ({other}) "),
    }
}

/// Label shown for a choice
pub(super) fn choice_label(choice: &Value) -> String {
    match choice {
        Value::String(s) => s.clone(),
        Value::Object(obj) => obj
            .get("name")
            .or_else(|| obj.get("value"))
            .map_or_else(|| choice.to_string(), label_text),
        other => other.to_string(),
    }
}

/// Value stored when a choice is picked
fn choice_value(choice: &Value) -> Value {
    match choice {
        Value::Object(obj) => obj
            .get("value")
            .or_else(|| obj.get("name"))
            .cloned()
            .unwrap_or_else(|| choice.clone()),
        other => other.clone(),
    }
}

fn label_text(value: &Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_string(), str::to_string)
}

/// Pick one choice by 1-based index or by label
fn pick(choices: &[Value], token: &str) -> Option<Value> {
    if let Ok(index) = token.parse::<usize>()
        && (1..=choices.len()).contains(&index)
    {
        return Some(choice_value(&choices[index - 1]));
    }
    choices
        .iter()
        .find(|c| choice_label(c) == token)
        .map(choice_value)
}

/// Turn a line of input into the raw answer for `question`
///
/// Empty input selects the default when there is one. Returns a message to
/// show the user when the input cannot be interpreted.
pub(super) fn convert_input(question: &Question, input: &str) -> Result<Value, String> {
    let input = input.trim();
    let default = question.resolved_default();
    let kind = question.kind.as_deref().unwrap_or("input");

    if kind == "confirm" {
        return match input.to_ascii_lowercase().as_str() {
            "" => Ok(default.cloned().unwrap_or(Value::Bool(true))),
            "y" | "yes" | "true" => Ok(Value::Bool(true)),
            "n" | "no" | "false" => Ok(Value::Bool(false)),
            _ => Err("Please answer y or n".to_string()),
        };
    }

    if input.is_empty()
        && let Some(default) = default
    {
        return Ok(default.clone());
    }

    if let Some(choices) = question.resolved_choices() {
        if kind == "checkbox" {
            return input
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(|t| pick(choices, t).ok_or_else(|| format!("Unknown choice: {t}")))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array);
        }
        return pick(choices, input).ok_or_else(|| "Please pick one of the choices".to_string());
    }

    if kind == "number" {
        if let Ok(n) = input.parse::<i64>() {
            return Ok(Value::from(n));
        }
        return input
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| "Please enter a number".to_string());
    }

    Ok(Value::String(input.to_string()))
}
