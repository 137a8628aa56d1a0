//! Configuration constants for the socket transport

/// Default peer host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default peer port
pub const DEFAULT_PORT: u16 = 22212;

/// Default maximum size of one inbound payload (1MB)
pub const DEFAULT_MAX_BUFFER_SIZE: usize = 1024 * 1024;
