//! UseCase: 接続一覧の取得（診断用）

use std::sync::Arc;

use crate::domain::{Connection, ConnectionRegistry};

/// 接続一覧取得のユースケース
pub struct ListConnectionsUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl ListConnectionsUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// 現在登録されている接続を登録順に返す
    pub async fn execute(&self) -> Vec<Connection> {
        self.registry.snapshot().await
    }
}
