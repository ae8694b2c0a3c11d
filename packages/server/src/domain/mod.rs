//! Domain layer: value objects, entities and the registry abstraction.

pub mod entity;
pub mod error;
pub mod registry;
pub mod value_object;

pub use entity::{Connection, Envelope, PusherChannel};
pub use error::{MessagePushError, ValueObjectError};
pub use registry::ConnectionRegistry;
#[cfg(test)]
pub use registry::MockConnectionRegistry;
pub use value_object::{ConnectionId, MessageText};
