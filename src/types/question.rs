//! Question definitions
//!
//! A [`Question`] is a named unit of input. Its `message`, `default` and
//! `choices` may be fixed values or functions of the answers collected so far
//! (see [`Dynamic`]); `when`, `validate` and `filter` are optional callbacks
//! that never leave the process.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::sync::Arc;

use super::answers::AnswerSet;

// ============================================================================
// Callback types
// ============================================================================

/// Function computing a field from prior answers
pub type ComputeCallback<T> = Arc<dyn Fn(&AnswerSet) -> T + Send + Sync>;

/// Visibility predicate evaluated against prior answers
pub type WhenCallback = Arc<dyn Fn(&AnswerSet) -> bool + Send + Sync>;

/// Answer validator
pub type ValidateCallback = Arc<dyn Fn(&Value) -> Verdict + Send + Sync>;

/// Answer transform applied after validation
pub type FilterCallback = Arc<dyn Fn(Value) -> Value + Send + Sync>;

// ============================================================================
// Dynamic fields
// ============================================================================

/// A field that is either fixed or computed from the answers collected so far
#[derive(Clone)]
pub enum Dynamic<T> {
    /// Concrete value
    Static(T),
    /// Value derived from prior answers
    Computed(ComputeCallback<T>),
}

impl<T> Dynamic<T> {
    /// Wrap a function of prior answers
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&AnswerSet) -> T + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    /// Whether the field still needs resolving
    #[must_use]
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    /// The concrete value, if resolved
    #[must_use]
    pub fn as_static(&self) -> Option<&T> {
        match self {
            Self::Static(value) => Some(value),
            Self::Computed(_) => None,
        }
    }

    /// Replace a computed field with its value for `answers`
    ///
    /// Static fields are left alone, so resolving twice is a no-op.
    pub fn resolve(&mut self, answers: &AnswerSet) {
        if let Self::Computed(f) = self {
            let value = f(answers);
            *self = Self::Static(value);
        }
    }
}

impl<T> From<T> for Dynamic<T> {
    fn from(value: T) -> Self {
        Self::Static(value)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Dynamic<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(<callback>)"),
        }
    }
}

// ============================================================================
// Validation verdict
// ============================================================================

/// Outcome of a question's validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Accept the answer
    Valid,
    /// Reject the answer, optionally with a message for the user
    Invalid(Option<String>),
}

impl Verdict {
    /// Reject with a message
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid(Some(reason.into()))
    }

    /// Whether the answer was accepted
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<bool> for Verdict {
    fn from(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid(None) }
    }
}

impl From<String> for Verdict {
    fn from(reason: String) -> Self {
        Self::Invalid(Some(reason))
    }
}

impl From<&str> for Verdict {
    fn from(reason: &str) -> Self {
        Self::Invalid(Some(reason.to_string()))
    }
}

impl<E: Into<String>> From<std::result::Result<(), E>> for Verdict {
    fn from(result: std::result::Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(reason) => Self::Invalid(Some(reason.into())),
        }
    }
}

// ============================================================================
// Question
// ============================================================================

/// A named unit of input to collect
#[derive(Clone)]
pub struct Question {
    /// Unique key within a session
    pub name: String,
    /// Widget type hint for the renderer (`input`, `confirm`, `list`, ...)
    pub kind: Option<String>,
    /// Text shown to the user
    pub message: Option<Dynamic<String>>,
    /// Default answer
    pub default: Option<Dynamic<Value>>,
    /// Selectable options
    pub choices: Option<Dynamic<Vec<Value>>>,
    /// Ask only when this returns true
    pub when: Option<WhenCallback>,
    /// Accept or reject an answer
    pub validate: Option<ValidateCallback>,
    /// Transform an accepted answer before it is stored
    pub filter: Option<FilterCallback>,
    /// Extra renderer metadata passed through untouched
    pub extra: Map<String, Value>,
}

impl Question {
    /// Create a question with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            message: None,
            default: None,
            choices: None,
            when: None,
            validate: None,
            filter: None,
            extra: Map::new(),
        }
    }

    /// Free-text question
    pub fn input(name: impl Into<String>) -> Self {
        Self::new(name).kind("input")
    }

    /// Yes/no question
    pub fn confirm(name: impl Into<String>) -> Self {
        Self::new(name).kind("confirm")
    }

    /// Single choice from a list
    pub fn list(name: impl Into<String>) -> Self {
        Self::new(name).kind("list")
    }

    /// Set the widget type
    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set a fixed message
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(Dynamic::Static(message.into()));
        self
    }

    /// Compute the message from prior answers
    #[must_use]
    pub fn message_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&AnswerSet) -> String + Send + Sync + 'static,
    {
        self.message = Some(Dynamic::computed(f));
        self
    }

    /// Set a fixed default
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(Dynamic::Static(value.into()));
        self
    }

    /// Compute the default from prior answers
    #[must_use]
    pub fn default_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&AnswerSet) -> Value + Send + Sync + 'static,
    {
        self.default = Some(Dynamic::computed(f));
        self
    }

    /// Set fixed choices
    #[must_use]
    pub fn choices<I, V>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.choices = Some(Dynamic::Static(
            choices.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Compute the choices from prior answers
    #[must_use]
    pub fn choices_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&AnswerSet) -> Vec<Value> + Send + Sync + 'static,
    {
        self.choices = Some(Dynamic::computed(f));
        self
    }

    /// Only ask when `f` returns true for the answers so far
    #[must_use]
    pub fn when<F>(mut self, f: F) -> Self
    where
        F: Fn(&AnswerSet) -> bool + Send + Sync + 'static,
    {
        self.when = Some(Arc::new(f));
        self
    }

    /// Validate answers
    ///
    /// The closure may return a [`Verdict`], a `bool`, a message string (which
    /// always rejects), or a `Result<(), impl Into<String>>`.
    #[must_use]
    pub fn validate<F, V>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> V + Send + Sync + 'static,
        V: Into<Verdict>,
    {
        self.validate = Some(Arc::new(move |answer| f(answer).into()));
        self
    }

    /// Transform accepted answers
    #[must_use]
    pub fn filter<F>(mut self, f: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(f));
        self
    }

    /// Attach extra renderer metadata
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Whether this question depends on prior answers
    ///
    /// True if it has a `when` predicate or any computed field.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.when.is_some()
            || self.message.as_ref().is_some_and(Dynamic::is_computed)
            || self.default.as_ref().is_some_and(Dynamic::is_computed)
            || self.choices.as_ref().is_some_and(Dynamic::is_computed)
    }

    /// Evaluate `when`; questions without one are always asked
    #[must_use]
    pub fn should_ask(&self, answers: &AnswerSet) -> bool {
        self.when.as_ref().is_none_or(|when| when(answers))
    }

    /// Resolve computed `message`, `default` and `choices` in place
    pub fn resolve(&mut self, answers: &AnswerSet) {
        if let Some(message) = self.message.as_mut() {
            message.resolve(answers);
        }
        if let Some(default) = self.default.as_mut() {
            default.resolve(answers);
        }
        if let Some(choices) = self.choices.as_mut() {
            choices.resolve(answers);
        }
    }

    /// Resolved message, falling back to the name
    #[must_use]
    pub fn display_message(&self) -> &str {
        self.message
            .as_ref()
            .and_then(Dynamic::as_static)
            .map_or(self.name.as_str(), String::as_str)
    }

    /// Resolved default, if any
    #[must_use]
    pub fn resolved_default(&self) -> Option<&Value> {
        self.default.as_ref().and_then(Dynamic::as_static)
    }

    /// Resolved choices, if any
    #[must_use]
    pub fn resolved_choices(&self) -> Option<&[Value]> {
        self.choices
            .as_ref()
            .and_then(Dynamic::as_static)
            .map(Vec::as_slice)
    }

    /// JSON representation sent to the peer
    ///
    /// Callbacks are omitted, as are fields that have not been resolved yet.
    #[must_use]
    pub fn to_wire(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("name".to_string(), Value::String(self.name.clone()));
        if let Some(ref kind) = self.kind {
            obj.insert("type".to_string(), Value::String(kind.clone()));
        }
        if let Some(message) = self.message.as_ref().and_then(Dynamic::as_static) {
            obj.insert("message".to_string(), Value::String(message.clone()));
        }
        if let Some(default) = self.resolved_default() {
            obj.insert("default".to_string(), default.clone());
        }
        if let Some(choices) = self.resolved_choices() {
            obj.insert("choices".to_string(), Value::Array(choices.to_vec()));
        }
        for (key, value) in &self.extra {
            obj.entry(key.clone()).or_insert_with(|| value.clone());
        }
        Value::Object(obj)
    }
}

impl std::fmt::Debug for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Question")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("default", &self.default)
            .field("choices", &self.choices)
            .field("when", &self.when.as_ref().map(|_| "<callback>"))
            .field("validate", &self.validate.as_ref().map(|_| "<callback>"))
            .field("filter", &self.filter.as_ref().map(|_| "<callback>"))
            .field("extra", &self.extra)
            .finish()
    }
}

impl Serialize for Question {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire().serialize(serializer)
    }
}

/// Static question definition as found in JSON files
#[derive(Deserialize)]
struct QuestionDef {
    name: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    default: Option<Value>,
    #[serde(default)]
    choices: Option<Vec<Value>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl<'de> Deserialize<'de> for Question {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let def = QuestionDef::deserialize(deserializer)?;
        let mut question = Self::new(def.name);
        question.kind = def.kind;
        question.message = def.message.map(Dynamic::Static);
        question.default = def.default.map(Dynamic::Static);
        question.choices = def.choices.map(Dynamic::Static);
        question.extra = def.extra;
        Ok(question)
    }
}
