//! # interrogate
//!
//! Collect structured answers to a sequence of questions, either on the local
//! terminal or by forwarding the questions over a TCP socket to a separate UI
//! process (an IDE, for example) that renders them and sends answers back.
//!
//! ## Quick Start
//!
//! ```no_run
//! use interrogate::{PromptOptions, Question, prompt};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let questions = vec![
//!         Question::list("platform")
//!             .message("Target platform?")
//!             .choices(["android", "ios"]),
//!         Question::input("sdk")
//!             .message_fn(|answers| {
//!                 format!("SDK path for {}?", answers.get("platform").unwrap_or(&json!("?")))
//!             })
//!             .validate(|v: &serde_json::Value| {
//!                 if v.as_str().is_some_and(|s| !s.is_empty()) {
//!                     Ok(())
//!                 } else {
//!                     Err("a path is required")
//!                 }
//!             }),
//!     ];
//!
//!     let options = PromptOptions::builder().socket(true).port(22212).build();
//!     let answers = prompt(questions, Some(options)).await?;
//!     log::info!("answers: {answers:?}");
//!     Ok(())
//! }
//! ```
//!
//! ## Remote protocol
//!
//! The client writes `{"type":"question","question":...}` frames, one JSON
//! document per line, and waits for exactly one answer payload after each.
//! In single-question mode the answer is a bare JSON value; in bundle mode it
//! is an object keyed by question name. Undecodable or rejected answers are
//! reported to the peer with an `{"type":"error","code":"ERROR_PARSE"|"ERROR_VALIDATE"}`
//! frame and end the session. See [`protocol`].
//!
//! ## Architecture
//!
//! - [`types`]: Questions, answers and options
//! - [`questions`]: Validation, bundle planning and question loading
//! - [`protocol`]: Wire frames
//! - [`transport`]: Socket transport
//! - [`orchestrator`]: The per-session exchange loop
//! - [`local`]: Terminal prompting
//! - [`error`]: Error types and handling

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod local;
pub mod orchestrator;
pub mod prompt;
pub mod protocol;
pub mod questions;
pub mod transport;
pub mod types;

// Re-export commonly used types for external API
pub use error::{PromptError, Result};
pub use orchestrator::{PromptOrchestrator, SessionState};
pub use prompt::{prompt, socket_message};
pub use questions::{Bundle, load_questions, plan_bundles, validate_answer};
pub use transport::{SocketTransport, Transport};
pub use types::{
    AnswerSet, Dynamic, PromptOptions, PromptOptionsBuilder, Question, SessionConfig, SessionId,
    Verdict,
};

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
