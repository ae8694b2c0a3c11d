//! WebSocket payloads sent from the server to clients.

use serde::{Deserialize, Serialize};

/// Value of the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    Echo,
    Broadcast,
}

/// Reply sent back to the sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoMessage {
    pub r#type: MessageType,
    pub original: String,
    pub timestamp: String,
    pub client: String,
    pub server: String,
}

/// Message relayed to every other connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastMessage {
    pub r#type: MessageType,
    pub from: String,
    pub message: String,
    pub timestamp: String,
}

/// Any server-to-client payload; the `type` field already disambiguates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OutboundMessage {
    Echo(EchoMessage),
    Broadcast(BroadcastMessage),
}

impl OutboundMessage {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
