//! Server execution logic.

use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tokio_util::{sync::CancellationToken, task::TaskTracker};
use tower_http::trace::TraceLayer;

use crate::{
    config::ServerConfig,
    usecase::{ConnectUseCase, DisconnectUseCase, ListConnectionsUseCase, RelayMessageUseCase},
};

use super::{
    handler::{health_check, list_connections, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// WebSocket echo and broadcast relay server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     connect_usecase,
///     disconnect_usecase,
///     relay_message_usecase,
///     list_connections_usecase,
/// );
/// server.run(&ServerConfig::default()).await?;
/// ```
pub struct Server {
    /// ConnectUseCase（接続登録のユースケース）
    connect_usecase: Arc<ConnectUseCase>,
    /// DisconnectUseCase（接続解除のユースケース）
    disconnect_usecase: Arc<DisconnectUseCase>,
    /// RelayMessageUseCase（エコーとブロードキャストのユースケース）
    relay_message_usecase: Arc<RelayMessageUseCase>,
    /// ListConnectionsUseCase（接続一覧取得のユースケース）
    list_connections_usecase: Arc<ListConnectionsUseCase>,
}

impl Server {
    pub fn new(
        connect_usecase: Arc<ConnectUseCase>,
        disconnect_usecase: Arc<DisconnectUseCase>,
        relay_message_usecase: Arc<RelayMessageUseCase>,
        list_connections_usecase: Arc<ListConnectionsUseCase>,
    ) -> Self {
        Self {
            connect_usecase,
            disconnect_usecase,
            relay_message_usecase,
            list_connections_usecase,
        }
    }

    /// Bind to the configured address and serve until Ctrl+C or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = config.bind_addr();
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Connect to: ws://{}", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await?;
        Ok(())
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    ///
    /// On shutdown every open session is cancelled and this returns only after
    /// all of them have unregistered their connection.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let shutdown_token = CancellationToken::new();
        let sessions = TaskTracker::new();

        let app_state = Arc::new(AppState {
            connect_usecase: self.connect_usecase,
            disconnect_usecase: self.disconnect_usecase,
            relay_message_usecase: self.relay_message_usecase,
            list_connections_usecase: self.list_connections_usecase,
            shutdown: shutdown_token.clone(),
            sessions: sessions.clone(),
        });

        tracing::info!(
            "WebSocket relay server listening on {}",
            listener.local_addr()?
        );

        let token = shutdown_token.clone();
        axum::serve(
            listener,
            router(app_state).into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            shutdown.await;
            tracing::info!("Shutting down, closing all sessions");
            token.cancel();
        })
        .await?;

        // Upgraded sockets outlive axum's own connection tracking
        shutdown_token.cancel();
        sessions.close();
        sessions.wait().await;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        // WebSocket エンドポイント
        .route("/", get(websocket_handler))
        .route("/ws", get(websocket_handler))
        // HTTP エンドポイント
        .route("/api/health", get(health_check))
        .route("/api/connections", get(list_connections))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
