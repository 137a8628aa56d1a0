//! Prompt orchestration over a transport
//!
//! [`PromptOrchestrator`] drives one prompting session:
//! `Idle -> Connecting -> Exchanging -> Done | Failed`. In single-question
//! mode every visible question is one exchange; in bundle mode questions are
//! grouped by [`plan_bundles`](crate::questions::plan_bundles) and each
//! non-empty bundle is one exchange. The transport is closed before
//! [`run`](PromptOrchestrator::run) returns, whatever the outcome.

mod bundled;
mod single;

use serde_json::Value;

use crate::error::Result;
use crate::protocol::ClientFrame;
use crate::questions::validate_answer;
use crate::transport::Transport;
use crate::types::{AnswerSet, Question};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Not started
    Idle,
    /// Opening the transport
    Connecting,
    /// Sending questions and receiving answers
    Exchanging,
    /// All questions processed
    Done,
    /// Aborted by a connection, parse or validation error
    Failed,
}

/// Drives question exchanges over a [`Transport`]
pub struct PromptOrchestrator<T: Transport> {
    transport: T,
    bundle: bool,
    state: SessionState,
    answers: AnswerSet,
}

impl<T: Transport> PromptOrchestrator<T> {
    /// Create an orchestrator
    ///
    /// # Arguments
    /// * `transport` - Unconnected transport, owned for the session
    /// * `bundle` - Use bundle mode instead of one question per exchange
    pub fn new(transport: T, bundle: bool) -> Self {
        Self {
            transport,
            bundle,
            state: SessionState::Idle,
            answers: AnswerSet::new(),
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Answers collected so far
    ///
    /// After a failure this holds whatever was committed before the error and
    /// should not be relied on.
    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Give back the transport
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Ask `questions` and return the accepted answers
    ///
    /// # Errors
    /// Returns `Connection` if the transport fails, `Parse` if a response
    /// cannot be decoded, `Validation` if an answer is rejected. The peer is
    /// told about parse and validation failures before this returns.
    pub async fn run(&mut self, questions: Vec<Question>) -> Result<AnswerSet> {
        self.transition(SessionState::Connecting);
        let outcome = match self.transport.connect().await {
            Ok(()) => {
                self.transition(SessionState::Exchanging);
                if self.bundle {
                    self.exchange_bundles(questions).await
                } else {
                    self.exchange_single(questions).await
                }
            }
            Err(e) => Err(e),
        };

        if let Err(e) = self.transport.close().await {
            log::warn!("Failed to close transport: {e}");
        }

        match outcome {
            Ok(()) => {
                self.transition(SessionState::Done);
                Ok(self.answers.clone())
            }
            Err(e) => {
                self.transition(SessionState::Failed);
                Err(e)
            }
        }
    }

    /// Validate and filter one answer, telling the peer if it is rejected
    async fn accept(&mut self, question: &Question, raw: Value) -> Result<Value> {
        match validate_answer(question, raw) {
            Ok(answer) => Ok(answer),
            Err(rejection) => {
                self.report(ClientFrame::validate_error(&rejection.reason))
                    .await;
                Err(rejection.into())
            }
        }
    }

    /// Tell the peer why the session is ending
    ///
    /// Best effort: the caller's error is what gets returned either way.
    async fn report(&mut self, frame: ClientFrame) {
        if let Err(e) = self.transport.send(frame.into()).await {
            log::warn!("Could not report error to peer: {e}");
        }
    }

    fn transition(&mut self, next: SessionState) {
        log::debug!("Prompt session {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
