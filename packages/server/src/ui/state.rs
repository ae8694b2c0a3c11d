//! Server state shared by every handler.

use std::sync::Arc;

use tokio_util::{sync::CancellationToken, task::TaskTracker};

use crate::usecase::{
    ConnectUseCase, DisconnectUseCase, ListConnectionsUseCase, RelayMessageUseCase,
};

/// Shared application state
pub struct AppState {
    /// ConnectUseCase（接続登録のユースケース）
    pub connect_usecase: Arc<ConnectUseCase>,
    /// DisconnectUseCase（接続解除のユースケース）
    pub disconnect_usecase: Arc<DisconnectUseCase>,
    /// RelayMessageUseCase（エコーとブロードキャストのユースケース）
    pub relay_message_usecase: Arc<RelayMessageUseCase>,
    /// ListConnectionsUseCase（接続一覧取得のユースケース）
    pub list_connections_usecase: Arc<ListConnectionsUseCase>,
    /// Cancelled once on shutdown; every session's receive loop watches it
    pub shutdown: CancellationToken,
    /// Tracks running sessions so shutdown can wait for their cleanup
    pub sessions: TaskTracker,
}
