//! Type definitions for interrogate
//!
//! - [`question`] - Questions, dynamic fields and validator verdicts
//! - [`answers`] - The ordered answer set built during a session
//! - [`options`] - Prompt options and socket session configuration
//! - [`identifiers`] - Type-safe ID wrappers (`SessionId`)

pub mod answers;
pub mod identifiers;
pub mod options;
pub mod question;

// Re-export commonly used types
pub use answers::AnswerSet;
pub use identifiers::SessionId;
pub use options::{PromptOptions, PromptOptionsBuilder, SessionConfig};
pub use question::{
    ComputeCallback, Dynamic, FilterCallback, Question, ValidateCallback, Verdict, WhenCallback,
};
