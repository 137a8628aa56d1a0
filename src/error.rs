//! Error types for interrogate

use thiserror::Error;

/// Main error type for prompting sessions
#[derive(Error, Debug)]
pub enum PromptError {
    /// Transport-level failure: refused connection, reset, or peer hang-up
    #[error("Connection error: {0}")]
    Connection(String),

    /// The peer sent a response that could not be decoded
    #[error("Parse error: {message}")]
    Parse {
        /// Decoder message
        message: String,
    },

    /// The peer sent an answer that a question's validator rejected
    #[error("Validation error for '{name}': {reason}")]
    Validation {
        /// Name of the rejected question
        name: String,
        /// Validator message, or the default `invalid value for <name>`
        reason: String,
    },

    /// A frame could not be serialized
    #[error("JSON encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The local terminal collaborator failed
    #[error("Interactive prompt error: {0}")]
    Interactive(String),

    /// Invalid questions or options
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for prompting operations
pub type Result<T> = std::result::Result<T, PromptError>;

impl PromptError {
    /// Create a connection error
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a validation error
    pub fn validation(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an interactive prompt error
    pub fn interactive(msg: impl Into<String>) -> Self {
        Self::Interactive(msg.into())
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// True for transport failures
    #[must_use]
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// True when the peer response could not be decoded
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// True when a validator rejected a peer answer
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
