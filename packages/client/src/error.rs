//! Error types for the test client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Could not open the WebSocket connection
    #[error("Connection error: {0}")]
    Connection(String),

    /// Sending a message over the open connection failed
    #[error("Send error: {0}")]
    Send(String),

    /// Reading user input failed
    #[error("Input error: {0}")]
    Input(String),
}
