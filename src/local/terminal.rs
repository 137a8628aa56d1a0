//! `rustyline`-backed line reader

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::error::{PromptError, Result};

use super::LineReader;

/// Reads answers from the terminal with line editing and history
pub struct TerminalReader {
    editor: DefaultEditor,
}

impl TerminalReader {
    /// Create a reader on the current terminal
    ///
    /// # Errors
    /// Returns `Interactive` if the editor cannot be initialized
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()
            .map_err(|e| PromptError::interactive(format!("Failed to initialize readline: {e}")))?;
        Ok(Self { editor })
    }
}

impl LineReader for TerminalReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Interrupted) => Err(PromptError::interactive("Interrupted")),
            Err(e) => Err(PromptError::interactive(format!("Readline error: {e}"))),
        }
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }
}
