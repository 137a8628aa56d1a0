//! Single-question mode

use crate::error::Result;
use crate::protocol::ClientFrame;
use crate::questions::prepare;
use crate::transport::Transport;
use crate::types::Question;

use super::PromptOrchestrator;

impl<T: Transport> PromptOrchestrator<T> {
    /// Ask each visible question in its own exchange
    pub(super) async fn exchange_single(&mut self, questions: Vec<Question>) -> Result<()> {
        for question in questions {
            let Some(question) = prepare(question, &self.answers) else {
                continue;
            };

            self.transport
                .send(ClientFrame::question(&question).into())
                .await?;
            let raw = self.transport.receive_once().await?;
            let answer = self.accept(&question, raw).await?;

            self.answers.insert(question.name, answer);
        }
        Ok(())
    }
}
