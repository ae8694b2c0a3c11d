//! Domain errors.

use thiserror::Error;

use super::ConnectionId;

/// Value object validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    /// ConnectionId is empty
    #[error("ConnectionId cannot be empty")]
    ConnectionIdEmpty,

    /// ConnectionId is not of the form `host:port`
    #[error("ConnectionId '{0}' must be of the form host:port")]
    ConnectionIdMalformed(String),
}

/// Errors raised when pushing an envelope to a connection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    /// The connection's pusher loop has stopped, so nothing can reach the socket anymore
    #[error("Connection '{0}' is closed")]
    ChannelClosed(ConnectionId),
}
