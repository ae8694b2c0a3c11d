//! UseCase errors.

use thiserror::Error;

use crate::domain::{ConnectionId, MessagePushError};

/// Errors raised while registering a new connection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// Another live session already holds this id
    #[error("Connection '{0}' is already registered")]
    DuplicateConnection(ConnectionId),
}

/// Errors raised while relaying one inbound message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// The echo could not be queued for the sender; its session must end
    #[error("Failed to echo message back to sender: {0}")]
    EchoFailed(#[from] MessagePushError),
}
