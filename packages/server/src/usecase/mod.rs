//! UseCase layer: per-connection lifecycle and message relay.

mod connect;
mod disconnect;
mod error;
mod list_connections;
mod relay_message;

pub use connect::ConnectUseCase;
pub use disconnect::DisconnectUseCase;
pub use error::{ConnectError, RelayError};
pub use list_connections::ListConnectionsUseCase;
pub use relay_message::{RelayMessageUseCase, RelayReport};
