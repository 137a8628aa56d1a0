//! Local terminal prompting
//!
//! Questions are asked on the controlling terminal through a [`LineReader`].
//! [`LocalSession`] keeps two views of the answers: the ones the user actually
//! gave, and the raw mapping that also records a value for every question
//! whose `when` predicate hid it.

mod input;
mod session;
mod terminal;

pub use session::LocalSession;
pub use terminal::TerminalReader;

use crate::error::Result;
use crate::types::{AnswerSet, Question};

/// Source of user input for a [`LocalSession`]
pub trait LineReader {
    /// Show `prompt` and read one line
    ///
    /// Returns `Ok(None)` when input has ended.
    ///
    /// # Errors
    /// Returns `Interactive` if reading fails or the user interrupts
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Show an informational line (choices, validation messages)
    fn notify(&mut self, message: &str);
}

impl<R: LineReader + ?Sized> LineReader for &mut R {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).read_line(prompt)
    }

    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }
}

/// Ask `questions` on the terminal and return the raw answers
///
/// Blocks the calling thread.
///
/// # Errors
/// Returns `Interactive` if the terminal cannot be used or input ends early
pub fn prompt_terminal(questions: Vec<Question>) -> Result<AnswerSet> {
    let mut session = LocalSession::new(TerminalReader::new()?);
    session.run(questions)?;
    Ok(session.into_raw_answers())
}
