//! Lifecycle management for the socket transport (connect, close)

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio_util::codec::Framed;

use crate::error::{PromptError, Result};

use super::codec::PayloadCodec;
use super::transport::SocketTransport;

impl SocketTransport {
    /// Open the TCP connection
    ///
    /// There is no retry and no timeout: a refused connection fails at once,
    /// a silent host blocks until the OS gives up.
    ///
    /// # Errors
    /// Returns `Connection` if the peer cannot be reached
    pub(super) async fn connect_impl(&mut self) -> Result<()> {
        if self.framed.is_some() {
            return Ok(());
        }

        let address = self.config.address();
        let stream = TcpStream::connect((self.config.host.as_str(), self.config.port))
            .await
            .map_err(|e| PromptError::connection(format!("Failed to connect to {address}: {e}")))?;

        // Frames are small and strictly alternating
        if let Err(e) = stream.set_nodelay(true) {
            log::debug!("[{}] Could not set TCP_NODELAY: {e}", self.session_id);
        }

        self.framed = Some(Framed::new(
            stream,
            PayloadCodec::new(self.config.max_buffer_size),
        ));
        log::info!("[{}] Connected to {address}", self.session_id);
        Ok(())
    }

    /// Shut down the write side and drop the connection
    ///
    /// Closing an unconnected transport is a no-op.
    ///
    /// # Errors
    /// Returns `Connection` if the shutdown fails
    pub(super) async fn close_impl(&mut self) -> Result<()> {
        let Some(framed) = self.framed.take() else {
            return Ok(());
        };

        let mut stream = framed.into_inner();
        let result = stream
            .shutdown()
            .await
            .map_err(|e| PromptError::connection(format!("Failed to close socket: {e}")));

        log::info!(
            "[{}] Closed connection after {} frame(s)",
            self.session_id,
            self.frames_sent
        );
        result
    }
}
