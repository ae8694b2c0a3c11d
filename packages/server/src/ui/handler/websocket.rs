//! WebSocket session handler.
//!
//! Each accepted socket gets two tasks: a receive loop that relays inbound
//! messages, and a pusher loop that is the only writer of the socket. When
//! either ends, the other is aborted and the connection is unregistered.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{
        ConnectInfo, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, SplitStream, StreamExt},
};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    domain::{Connection, ConnectionId, Envelope, MessageText},
    infrastructure::dto::conversion::encode_envelope,
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let connection_id = ConnectionId::from(peer);
    tracing::debug!("Upgrading connection from '{}'", connection_id);

    let sessions = state.sessions.clone();
    ws.on_upgrade(move |socket| {
        sessions.track_future(handle_socket(socket, state, connection_id))
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, connection_id: ConnectionId) {
    // Connecting → Registered
    let (tx, rx) = mpsc::unbounded_channel();
    let connection = match state
        .connect_usecase
        .execute(connection_id.clone(), tx)
        .await
    {
        Ok(connection) => connection,
        Err(e) => {
            tracing::warn!("Rejecting connection: {}", e);
            return;
        }
    };

    // Registered → Reading
    let (sender, receiver) = socket.split();
    let mut send_task = pusher_loop(rx, sender, connection_id.clone());
    let mut recv_task = receive_loop(receiver, connection.clone(), state.clone());

    // If any one of the tasks completes, abort the other
    tokio::select! {
        result = &mut recv_task => {
            send_task.abort();
            if let Err(e) = result {
                tracing::error!("Receive loop of '{}' failed: {}", connection_id, e);
            }
        }
        result = &mut send_task => {
            recv_task.abort();
            if let Err(e) = result {
                tracing::error!("Pusher loop of '{}' failed: {}", connection_id, e);
            }
        }
    };

    // Closing: the only exit path after registration
    state.disconnect_usecase.execute(&connection).await;
    tracing::info!("Connection '{}' closed", connection_id);
}

/// Spawns a task that drains the connection's channel into its WebSocket sink.
///
/// Echoes from the connection's own session and broadcasts from other sessions
/// all arrive here, so writes to one socket never run concurrently.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<Envelope>,
    mut sender: SplitSink<WebSocket, Message>,
    connection_id: ConnectionId,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(envelope) = rx.recv().await {
            let json = match encode_envelope(envelope) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to serialize envelope: {}", e);
                    continue;
                }
            };

            if let Err(e) = sender.send(Message::Text(json.into())).await {
                tracing::warn!("Failed to write to '{}': {}", connection_id, e);
                break;
            }
        }
    })
}

/// Spawns a task that relays inbound text messages in arrival order until the
/// peer closes, the socket fails, the echo fails, or shutdown is requested.
fn receive_loop(
    mut receiver: SplitStream<WebSocket>,
    connection: Connection,
    state: Arc<AppState>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let next = tokio::select! {
                _ = state.shutdown.cancelled() => {
                    tracing::info!("Shutdown requested, closing '{}'", connection.id);
                    break;
                }
                next = receiver.next() => next,
            };

            let msg = match next {
                Some(Ok(msg)) => msg,
                Some(Err(e)) => {
                    tracing::warn!("WebSocket error from '{}': {}", connection.id, e);
                    break;
                }
                None => {
                    tracing::info!("Connection '{}' ended its stream", connection.id);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::info!("Received from '{}': {}", connection.id, text.as_str());

                    let text = MessageText::from(text.as_str());
                    if let Err(e) = state
                        .relay_message_usecase
                        .execute(&connection, text)
                        .await
                    {
                        tracing::warn!("{}", e);
                        break;
                    }
                }
                Message::Binary(data) => {
                    tracing::debug!(
                        "Ignoring binary frame ({} bytes) from '{}'",
                        data.len(),
                        connection.id
                    );
                }
                Message::Ping(_) | Message::Pong(_) => {
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection.id);
                    break;
                }
            }
        }
    })
}
