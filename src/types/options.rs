//! Prompt options and socket session configuration
//!
//! [`PromptOptions`] selects between the local terminal and a remote peer;
//! [`SessionConfig`] holds everything the socket path needs.

use crate::transport::socket::config::{DEFAULT_HOST, DEFAULT_MAX_BUFFER_SIZE, DEFAULT_PORT};

// ============================================================================
// Session configuration
// ============================================================================

/// Connection target and mode selector for a socket session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Peer host
    pub host: String,
    /// Peer port
    pub port: u16,
    /// Send questions in bundles instead of one at a time
    pub bundle: bool,
    /// Text of a one-shot message
    pub message: String,
    /// Code of a one-shot message
    pub code: String,
    /// `type` field of a one-shot message
    pub kind: Option<String>,
    /// Largest inbound payload accepted before it is treated as malformed
    pub max_buffer_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            bundle: false,
            message: String::new(),
            code: String::new(),
            kind: None,
            max_buffer_size: DEFAULT_MAX_BUFFER_SIZE,
        }
    }
}

impl SessionConfig {
    /// `host:port` string used for connecting and logging
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ============================================================================
// Prompt options
// ============================================================================

/// Options accepted by [`prompt`](crate::prompt())
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptOptions {
    /// Forward questions to a remote peer instead of the local terminal
    pub socket: bool,
    /// Socket session settings
    pub session: SessionConfig,
}

impl PromptOptions {
    /// Create a new builder for `PromptOptions`
    #[must_use]
    pub fn builder() -> PromptOptionsBuilder {
        PromptOptionsBuilder::default()
    }
}

// ============================================================================
// Builder for PromptOptions
// ============================================================================

/// Builder for `PromptOptions`
#[derive(Debug, Default)]
pub struct PromptOptionsBuilder {
    options: PromptOptions,
}

impl PromptOptionsBuilder {
    /// Use the socket path
    #[must_use]
    pub const fn socket(mut self, socket: bool) -> Self {
        self.options.socket = socket;
        self
    }

    /// Set the peer host
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.options.session.host = host.into();
        self
    }

    /// Set the peer port
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.options.session.port = port;
        self
    }

    /// Enable bundle mode
    #[must_use]
    pub const fn bundle(mut self, bundle: bool) -> Self {
        self.options.session.bundle = bundle;
        self
    }

    /// Set the one-shot message text
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.options.session.message = message.into();
        self
    }

    /// Set the one-shot message code
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.options.session.code = code.into();
        self
    }

    /// Set the one-shot message type
    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.options.session.kind = Some(kind.into());
        self
    }

    /// Set the inbound payload limit
    ///
    /// Zero restores the default limit.
    #[must_use]
    pub const fn max_buffer_size(mut self, size: usize) -> Self {
        self.options.session.max_buffer_size = if size == 0 {
            DEFAULT_MAX_BUFFER_SIZE
        } else {
            size
        };
        self
    }

    /// Build the options
    #[must_use]
    pub fn build(self) -> PromptOptions {
        self.options
    }
}
