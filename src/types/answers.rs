//! Accumulated answers for one prompting session

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered mapping from question name to accepted answer
///
/// Keys keep insertion order. A name, once set, is never overwritten, and
/// questions that were skipped are absent rather than `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(Map<String, Value>);

impl AnswerSet {
    /// Create an empty answer set
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Look up the answer for a question
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Whether an answer has been recorded for `name`
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Record an answer
    ///
    /// Returns `false` and leaves the set untouched if `name` already has an answer.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> bool {
        let name = name.into();
        if self.0.contains_key(&name) {
            log::warn!("Ignoring second answer for '{name}'");
            return false;
        }
        self.0.insert(name, value);
        true
    }

    /// Number of recorded answers
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no answers have been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Question names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over `(name, answer)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Borrow the underlying JSON object
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Convert into a JSON object value
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for AnswerSet {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<'a> IntoIterator for &'a AnswerSet {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_keeps_first_answer() {
        let mut answers = AnswerSet::new();
        assert!(answers.insert("a", json!(1)));
        assert!(!answers.insert("a", json!(2)));
        assert_eq!(answers.get("a"), Some(&json!(1)));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn preserves_insertion_order() {
        let mut answers = AnswerSet::new();
        answers.insert("zeta", json!(true));
        answers.insert("alpha", json!("x"));
        let names: Vec<&str> = answers.names().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(
            serde_json::to_string(&answers).unwrap(),
            r#"{"zeta":true,"alpha":"x"}"#
        );
    }
}
