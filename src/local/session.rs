//! Local prompting session

use serde_json::Value;

use crate::error::{PromptError, Result};
use crate::questions::validate_answer;
use crate::types::{AnswerSet, Question};

use super::LineReader;
use super::input::{choice_label, convert_input, render_prompt};

/// Live state of one terminal prompting run
pub struct LocalSession<R: LineReader> {
    reader: R,
    answers: AnswerSet,
    raw_answers: AnswerSet,
}

impl<R: LineReader> LocalSession<R> {
    /// Create a session reading from `reader`
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            answers: AnswerSet::new(),
            raw_answers: AnswerSet::new(),
        }
    }

    /// Ask `questions` in order
    ///
    /// `when` predicates and computed fields see only answers the user gave.
    /// A hidden question records its resolved default (or `null`) in the raw
    /// answers. Rejected input is reported and asked again.
    ///
    /// # Errors
    /// Returns `Interactive` if the reader fails or input ends before all
    /// visible questions are answered
    pub fn run(&mut self, questions: impl IntoIterator<Item = Question>) -> Result<()> {
        for mut question in questions {
            let visible = question.should_ask(&self.answers);
            question.resolve(&self.answers);

            if !visible {
                let fallback = question.resolved_default().cloned().unwrap_or(Value::Null);
                self.raw_answers.insert(question.name, fallback);
                continue;
            }

            let answer = self.ask(&question)?;
            self.answers.insert(question.name.clone(), answer.clone());
            self.raw_answers.insert(question.name, answer);
        }
        Ok(())
    }

    fn ask(&mut self, question: &Question) -> Result<Value> {
        let prompt = render_prompt(question);
        if let Some(choices) = question.resolved_choices() {
            for (i, choice) in choices.iter().enumerate() {
                self.reader
                    .notify(&format!("  {}) {}", i + 1, choice_label(choice)));
            }
        }

        loop {
            let Some(line) = self.reader.read_line(&prompt)? else {
                return Err(PromptError::interactive(format!(
                    "Input ended before '{}' was answered",
                    question.name
                )));
            };

            let raw = match convert_input(question, &line) {
                Ok(raw) => raw,
                Err(message) => {
                    self.reader.notify(&format!(">> {message}"));
                    continue;
                }
            };

            match validate_answer(question, raw) {
                Ok(answer) => return Ok(answer),
                Err(rejection) => self.reader.notify(&format!(">> {}", rejection.reason)),
            }
        }
    }

    /// Answers to the questions that were actually asked
    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Every question's answer, including hidden ones
    #[must_use]
    pub fn raw_answers(&self) -> &AnswerSet {
        &self.raw_answers
    }

    /// Consume the session, keeping the raw answers
    #[must_use]
    pub fn into_raw_answers(self) -> AnswerSet {
        self.raw_answers
    }
}
