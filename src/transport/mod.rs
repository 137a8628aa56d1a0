//! Transport layer for talking to the remote peer
//!
//! This module provides the transport abstraction and the TCP implementation
//! used by the socket prompting path.

pub mod socket;

use bytes::BytesMut;
use serde_json::Value;

use crate::error::{PromptError, Result};
use crate::protocol::{ClientFrame, OutboundFrame, decode_payload};

/// Transport trait for one prompting session
///
/// A transport owns a single connection. Exchanges are strictly alternating:
/// one [`send`](Transport::send) followed by one
/// [`receive_once`](Transport::receive_once).
pub trait Transport: Send {
    /// Connect to the peer
    ///
    /// # Errors
    /// Returns `Connection` if the peer cannot be reached
    fn connect(&mut self) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Write one frame
    ///
    /// # Errors
    /// Returns error if the frame cannot be encoded or written
    fn send(&mut self, frame: OutboundFrame)
    -> impl std::future::Future<Output = Result<()>> + Send;

    /// Wait for the next raw payload from the peer
    ///
    /// # Errors
    /// Returns `Connection` if the peer hangs up or the read fails
    fn receive_payload(&mut self) -> impl std::future::Future<Output = Result<BytesMut>> + Send;

    /// Close the connection
    ///
    /// # Errors
    /// Returns error if shutdown fails
    fn close(&mut self) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Wait for exactly one payload and decode it as JSON
    ///
    /// If decoding fails the peer is sent an `ERROR_PARSE` frame before the
    /// parse error is returned. A failure to send that frame is only logged.
    ///
    /// # Errors
    /// Returns `Parse` for undecodable payloads, `Connection` for transport failures
    fn receive_once(&mut self) -> impl std::future::Future<Output = Result<Value>> + Send {
        async move {
            let payload = self.receive_payload().await?;
            match decode_payload(&payload) {
                Ok(value) => Ok(value),
                Err(e) => {
                    let detail = e.to_string();
                    if let Err(e) = self.send(ClientFrame::parse_error(&detail).into()).await {
                        log::warn!("Could not report parse error to peer: {e}");
                    }
                    Err(PromptError::parse(detail))
                }
            }
        }
    }
}

pub use socket::SocketTransport;
