//! Messages the client understands from the server.

use serde::Deserialize;

/// Server-to-client payload, tagged by its `type` field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    Welcome {
        message: String,
    },
    Echo {
        original: String,
        #[serde(default)]
        timestamp: Option<String>,
        #[serde(default)]
        client: Option<String>,
        #[serde(default)]
        server: Option<String>,
    },
    Broadcast {
        from: String,
        message: String,
        #[serde(default)]
        timestamp: Option<String>,
    },
    Periodic {
        message: String,
        active_clients: u64,
    },
}

impl ServerMessage {
    /// Parse a text frame; `None` for non-JSON or unknown `type`s
    pub fn parse(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }
}
