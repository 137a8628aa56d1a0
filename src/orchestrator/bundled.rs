//! Bundle mode

use serde_json::Value;

use crate::error::{PromptError, Result};
use crate::protocol::ClientFrame;
use crate::questions::{plan_bundles, prepare};
use crate::transport::Transport;
use crate::types::Question;

use super::PromptOrchestrator;

impl<T: Transport> PromptOrchestrator<T> {
    /// Ask questions bundle by bundle
    ///
    /// `when` and computed fields of every member are evaluated against the
    /// answers known before the bundle is sent. A bundle's answers are only
    /// committed once all of them pass validation.
    pub(super) async fn exchange_bundles(&mut self, questions: Vec<Question>) -> Result<()> {
        for bundle in plan_bundles(questions) {
            let request: Vec<Question> = bundle
                .into_iter()
                .filter_map(|q| prepare(q, &self.answers))
                .collect();

            if request.is_empty() {
                log::debug!("Nothing to ask in this bundle");
                continue;
            }

            self.transport.send(ClientFrame::bundle(&request).into()).await?;
            let response = match self.transport.receive_once().await? {
                Value::Object(map) => map,
                other => {
                    let detail = format!("expected an object of answers, got {other}");
                    self.report(ClientFrame::parse_error(&detail)).await;
                    return Err(PromptError::parse(detail));
                }
            };

            let mut staged = Vec::with_capacity(response.len());
            for (name, raw) in response {
                let Some(question) = request.iter().find(|q| q.name == name) else {
                    log::warn!("Ignoring answer for '{name}': not part of the request bundle");
                    continue;
                };
                let answer = self.accept(question, raw).await?;
                staged.push((name, answer));
            }

            for (name, answer) in staged {
                self.answers.insert(name, answer);
            }
        }
        Ok(())
    }
}
