//! Payload reading for the socket transport

use bytes::BytesMut;
use futures::StreamExt;

use crate::error::{PromptError, Result};

use super::transport::SocketTransport;

impl SocketTransport {
    /// Wait for the next payload from the peer
    ///
    /// Blocks for as long as the peer stays silent.
    ///
    /// # Errors
    /// Returns `Connection` if not connected, on read failure, or if the peer
    /// closes the connection first
    pub(super) async fn receive_payload_impl(&mut self) -> Result<BytesMut> {
        let framed = self
            .framed
            .as_mut()
            .ok_or_else(|| PromptError::connection("Transport is not connected"))?;

        match framed.next().await {
            Some(Ok(payload)) => {
                log::debug!(
                    "[{}] <- {}",
                    self.session_id,
                    String::from_utf8_lossy(&payload)
                );
                Ok(payload)
            }
            Some(Err(e)) => Err(PromptError::connection(format!(
                "Failed to read from socket: {e}"
            ))),
            None => Err(PromptError::connection(
                "Peer closed the connection before answering",
            )),
        }
    }
}
