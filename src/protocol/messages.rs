//! Wire frame types
//!
//! Every frame is a JSON object. Frames from the client carry a `type` tag:
//! `question` ships one question or a bundle, `error` tells the peer its last
//! response was refused. One-shot notices use a caller-chosen `type`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::Question;

/// Why the client refused a peer response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// The response was not valid JSON (or not the expected shape)
    #[serde(rename = "ERROR_PARSE")]
    Parse,
    /// A question's validator rejected the answer
    #[serde(rename = "ERROR_VALIDATE")]
    Validate,
}

impl ErrorCode {
    /// Wire spelling of the code
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Parse => "ERROR_PARSE",
            Self::Validate => "ERROR_VALIDATE",
        }
    }
}

/// Payload of a question frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionBatch {
    /// Bundle mode: several questions answered by one name-keyed object
    Bundle(Vec<Value>),
    /// Single-question mode: answered by a bare value
    Single(Value),
}

/// Frames sent by the client during a question exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientFrame {
    /// Ask one question or a bundle
    Question {
        /// Serialized question(s)
        question: QuestionBatch,
    },
    /// Refuse the peer's last response
    Error {
        /// Failure category
        code: ErrorCode,
        /// Human readable detail
        message: String,
    },
}

impl ClientFrame {
    /// Ask a single question
    #[must_use]
    pub fn question(question: &Question) -> Self {
        Self::Question {
            question: QuestionBatch::Single(question.to_wire()),
        }
    }

    /// Ask a bundle of questions
    #[must_use]
    pub fn bundle(questions: &[Question]) -> Self {
        Self::Question {
            question: QuestionBatch::Bundle(questions.iter().map(Question::to_wire).collect()),
        }
    }

    /// Report an undecodable response
    pub fn parse_error(detail: impl std::fmt::Display) -> Self {
        Self::Error {
            code: ErrorCode::Parse,
            message: format!("parse error: {detail}"),
        }
    }

    /// Report a rejected answer
    pub fn validate_error(reason: impl std::fmt::Display) -> Self {
        Self::Error {
            code: ErrorCode::Validate,
            message: format!("validate error: {reason}"),
        }
    }
}

/// One-shot message sent without expecting a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Message category, sent as `type`
    #[serde(rename = "type")]
    pub kind: String,
    /// Message code
    pub code: String,
    /// Message text
    pub message: String,
}

/// Anything the client writes to the socket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutboundFrame {
    /// Question exchange frame
    Control(ClientFrame),
    /// One-shot notice
    Notice(Notice),
}

impl From<ClientFrame> for OutboundFrame {
    fn from(frame: ClientFrame) -> Self {
        Self::Control(frame)
    }
}

impl From<Notice> for OutboundFrame {
    fn from(notice: Notice) -> Self {
        Self::Notice(notice)
    }
}
