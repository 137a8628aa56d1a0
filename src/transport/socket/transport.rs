//! TCP transport implementation

use bytes::BytesMut;
use futures::SinkExt;
use tokio::net::TcpStream;
use tokio_util::codec::Framed;

use crate::Transport;
use crate::error::{PromptError, Result};
use crate::protocol::{OutboundFrame, encode_frame};
use crate::types::identifiers::SessionId;
use crate::types::options::SessionConfig;

use super::codec::PayloadCodec;

/// TCP transport to a remote prompt peer
pub struct SocketTransport {
    pub(super) config: SessionConfig,
    pub(super) session_id: SessionId,
    pub(super) framed: Option<Framed<TcpStream, PayloadCodec>>,
    pub(super) frames_sent: usize,
}

impl SocketTransport {
    /// Create an unconnected transport for `config`
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            session_id: SessionId::generate(),
            framed: None,
            frames_sent: 0,
        }
    }

    /// Session identifier used in log output
    #[must_use]
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Configuration this transport was created with
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

impl Transport for SocketTransport {
    async fn connect(&mut self) -> Result<()> {
        self.connect_impl().await
    }

    async fn send(&mut self, frame: OutboundFrame) -> Result<()> {
        let line = encode_frame(&frame)?;

        let framed = self
            .framed
            .as_mut()
            .ok_or_else(|| PromptError::connection("Transport is not connected"))?;

        log::debug!("[{}] -> {line}", self.session_id);
        framed
            .send(line)
            .await
            .map_err(|e| PromptError::connection(format!("Failed to write to socket: {e}")))?;

        self.frames_sent += 1;
        Ok(())
    }

    async fn receive_payload(&mut self) -> Result<BytesMut> {
        self.receive_payload_impl().await
    }

    async fn close(&mut self) -> Result<()> {
        self.close_impl().await
    }
}
