//! Remote prompt protocol
//!
//! The exchange is strictly alternating: the client writes one frame, the
//! peer answers with exactly one payload, and only then is the next frame
//! written.
//!
//! # Example: Frame encoding
//!
//! ```rust
//! use interrogate::protocol::{ClientFrame, encode_frame};
//! use interrogate::Question;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let frame = ClientFrame::question(&Question::input("name").message("Name?"));
//! let json = encode_frame(&frame.into())?;
//! assert_eq!(
//!     json,
//!     r#"{"type":"question","question":{"name":"name","type":"input","message":"Name?"}}"#
//! );
//! # Ok(())
//! # }
//! ```

mod messages;

pub use messages::{ClientFrame, ErrorCode, Notice, OutboundFrame, QuestionBatch};

use serde_json::Value;

use crate::error::Result;

/// Serialize a frame to a single line of JSON (without the trailing newline)
///
/// # Errors
/// Returns error if JSON serialization fails
pub fn encode_frame(frame: &OutboundFrame) -> Result<String> {
    Ok(serde_json::to_string(frame)?)
}

/// Decode one peer payload
///
/// # Errors
/// Returns the decoder error when the payload is not valid JSON
pub fn decode_payload(payload: &[u8]) -> std::result::Result<Value, serde_json::Error> {
    serde_json::from_slice(payload)
}
