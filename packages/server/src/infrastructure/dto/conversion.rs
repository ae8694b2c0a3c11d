//! Conversion logic between domain models and DTOs.

use crate::domain::{Connection, Envelope};
use crate::infrastructure::dto::{http, websocket as dto};

// ========================================
// Domain → DTO
// ========================================

impl From<Envelope> for dto::OutboundMessage {
    fn from(envelope: Envelope) -> Self {
        match envelope {
            Envelope::Echo {
                original,
                timestamp,
                client,
                server,
            } => Self::Echo(dto::EchoMessage {
                r#type: dto::MessageType::Echo,
                original: original.into_string(),
                timestamp,
                client: client.into_string(),
                server,
            }),
            Envelope::Broadcast {
                from,
                message,
                timestamp,
            } => Self::Broadcast(dto::BroadcastMessage {
                r#type: dto::MessageType::Broadcast,
                from: from.into_string(),
                message: message.into_string(),
                timestamp,
            }),
        }
    }
}

impl From<Connection> for http::ConnectionDetailDto {
    fn from(connection: Connection) -> Self {
        Self {
            connected_at: connection.connected_at.to_rfc3339(),
            id: connection.id.into_string(),
        }
    }
}

impl From<Vec<Connection>> for http::ConnectionsDto {
    fn from(connections: Vec<Connection>) -> Self {
        Self {
            count: connections.len(),
            connections: connections.into_iter().map(Into::into).collect(),
        }
    }
}

/// Serialize an envelope into the JSON text frame sent on the wire
pub fn encode_envelope(envelope: Envelope) -> Result<String, serde_json::Error> {
    dto::OutboundMessage::from(envelope).to_json()
}
