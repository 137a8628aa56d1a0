//! Entry points: [`prompt`] and [`socket_message`]

use crate::error::{PromptError, Result};
use crate::local;
use crate::orchestrator::PromptOrchestrator;
use crate::protocol::Notice;
use crate::transport::{SocketTransport, Transport};
use crate::types::{AnswerSet, PromptOptions, Question, SessionConfig};

/// Message type used when none is configured
const DEFAULT_MESSAGE_TYPE: &str = "message";

/// Ask `questions` and return the answers
///
/// With `options.socket` set, questions are forwarded to the peer at
/// `options.session` (one at a time, or in bundles when
/// `options.session.bundle` is set). Otherwise they are asked on the local
/// terminal and the result includes an entry for every question, even those
/// hidden by `when`. `None` options mean the local terminal.
///
/// # Example
///
/// ```no_run
/// use interrogate::{PromptOptions, Question, prompt};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let questions = vec![
///     Question::input("name").message("Project name?"),
///     Question::confirm("git").message("Initialize git?").default_value(true),
/// ];
/// let options = PromptOptions::builder().socket(true).bundle(true).build();
///
/// let answers = prompt(questions, Some(options)).await?;
/// println!("{}", serde_json::to_string(&answers)?);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// See [`PromptOrchestrator::run`] for the socket path; the terminal path
/// returns `Interactive` errors
pub async fn prompt(
    questions: impl Into<Vec<Question>>,
    options: Option<PromptOptions>,
) -> Result<AnswerSet> {
    let options = options.unwrap_or_default();
    let questions = questions.into();

    if options.socket {
        log::debug!(
            "Asking {} question(s) via {} (bundle: {})",
            questions.len(),
            options.session.address(),
            options.session.bundle
        );
        let bundle = options.session.bundle;
        let mut orchestrator = PromptOrchestrator::new(SocketTransport::new(options.session), bundle);
        return orchestrator.run(questions).await;
    }

    tokio::task::spawn_blocking(move || local::prompt_terminal(questions))
        .await
        .map_err(|e| PromptError::interactive(format!("Terminal prompt task failed: {e}")))?
}

/// Send a one-shot `{type, code, message}` notice to the peer
///
/// Opens a fresh connection, writes the notice, and closes it. No reply is
/// read.
///
/// # Errors
/// Returns `Connection` if the peer cannot be reached or the write fails
pub async fn socket_message(config: &SessionConfig) -> Result<()> {
    let notice = Notice {
        kind: config
            .kind
            .clone()
            .unwrap_or_else(|| DEFAULT_MESSAGE_TYPE.to_string()),
        code: config.code.clone(),
        message: config.message.clone(),
    };

    let mut transport = SocketTransport::new(config.clone());
    transport.connect().await?;
    let sent = transport.send(notice.into()).await;
    let closed = transport.close().await;
    sent.and(closed)
}
