//! Entities: the live connection handle and the outbound envelope.

use chrono::{DateTime, FixedOffset};
use tokio::sync::mpsc;

use super::{ConnectionId, MessagePushError, MessageText};

/// Channel feeding a connection's pusher loop, the single writer of its socket.
pub type PusherChannel = mpsc::UnboundedSender<Envelope>;

/// Outbound payload, created per inbound message and discarded after sending
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    /// Reply to the connection that sent the message
    Echo {
        original: MessageText,
        timestamp: String,
        client: ConnectionId,
        server: String,
    },
    /// Copy of the message for every other connection
    Broadcast {
        from: ConnectionId,
        message: MessageText,
        timestamp: String,
    },
}

impl Envelope {
    pub fn echo(
        original: MessageText,
        timestamp: String,
        client: ConnectionId,
        server: String,
    ) -> Self {
        Self::Echo {
            original,
            timestamp,
            client,
            server,
        }
    }

    pub fn broadcast(from: ConnectionId, message: MessageText, timestamp: String) -> Self {
        Self::Broadcast {
            from,
            message,
            timestamp,
        }
    }
}

/// Handle to one open connection.
///
/// Cloning the handle clones only the channel to the pusher loop. The socket
/// itself stays owned by the session that accepted it.
#[derive(Debug, Clone)]
pub struct Connection {
    pub id: ConnectionId,
    pub connected_at: DateTime<FixedOffset>,
    channel: PusherChannel,
}

impl Connection {
    pub fn new(
        id: ConnectionId,
        channel: PusherChannel,
        connected_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id,
            connected_at,
            channel,
        }
    }

    /// Queue an envelope for this connection's socket.
    ///
    /// Concurrent pushes from several sessions are serialised by the channel.
    pub fn push(&self, envelope: Envelope) -> Result<(), MessagePushError> {
        self.channel
            .send(envelope)
            .map_err(|_| MessagePushError::ChannelClosed(self.id.clone()))
    }

    /// Whether both handles feed the same pusher loop.
    ///
    /// A peer that reconnects from the same address gets the same id but a new
    /// channel, so this tells the two sessions apart where `==` cannot.
    pub fn same_channel(&self, other: &Connection) -> bool {
        self.channel.same_channel(&other.channel)
    }
}

impl PartialEq for Connection {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Connection {}
