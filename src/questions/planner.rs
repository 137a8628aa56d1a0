//! Bundle planning
//!
//! A bundle is a run of questions that can go to the peer in one exchange.
//! Any question with a `when` predicate or a computed field opens a new
//! bundle, as does the first question; every other question joins the most
//! recent bundle. Changing this grouping changes what goes over the wire.

use crate::types::Question;

/// Questions sent together in one exchange
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    questions: Vec<Question>,
}

impl Bundle {
    fn start(anchor: Question) -> Self {
        Self {
            questions: vec![anchor],
        }
    }

    /// Questions in send order
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bundle is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question names in send order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|q| q.name.as_str())
    }
}

impl IntoIterator for Bundle {
    type Item = Question;
    type IntoIter = std::vec::IntoIter<Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.into_iter()
    }
}

/// Partition `questions` into bundles, preserving order
#[must_use]
pub fn plan_bundles(questions: impl IntoIterator<Item = Question>) -> Vec<Bundle> {
    let mut bundles: Vec<Bundle> = Vec::new();

    for question in questions {
        match bundles.last_mut() {
            Some(current) if !question.is_dynamic() => current.questions.push(question),
            _ => bundles.push(Bundle::start(question)),
        }
    }

    log::debug!(
        "Planned {} bundle(s): {:?}",
        bundles.len(),
        bundles.iter().map(Bundle::len).collect::<Vec<_>>()
    );
    bundles
}
