//! TCP socket transport
//!
//! Connects to a peer (typically an IDE) that renders questions and returns
//! answers as JSON.

mod codec;
pub mod config;
mod lifecycle;
mod reader;
mod transport;

// Re-export public types
pub use codec::PayloadCodec;
pub use transport::SocketTransport;
