//! UseCase: 接続の登録処理

use std::sync::Arc;

use yamabiko_shared::time::Clock;

use crate::domain::{Connection, ConnectionId, ConnectionRegistry, PusherChannel};

use super::error::ConnectError;

/// 接続登録のユースケース
pub struct ConnectUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    clock: Arc<dyn Clock>,
}

impl ConnectUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self { registry, clock }
    }

    /// 接続を Registry に登録し、登録済みの Connection を返す
    ///
    /// # Arguments
    ///
    /// * `id` - 接続 ID（リモートの ip:port）
    /// * `channel` - この接続の pusher loop へのチャネル
    ///
    /// # Returns
    ///
    /// * `Ok(Connection)` - 登録された接続
    /// * `Err(ConnectError::DuplicateConnection)` - 同じ ID が既に登録済み
    pub async fn execute(
        &self,
        id: ConnectionId,
        channel: PusherChannel,
    ) -> Result<Connection, ConnectError> {
        let connection = Connection::new(id.clone(), channel, self.clock.now());

        if !self.registry.register(connection.clone()).await {
            return Err(ConnectError::DuplicateConnection(id));
        }

        tracing::info!(
            "Connection '{}' registered (total: {})",
            id,
            self.registry.size().await
        );
        Ok(connection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::MockConnectionRegistry, infrastructure::registry::InMemoryConnectionRegistry,
    };
    use chrono::{FixedOffset, TimeZone};
    use tokio::sync::mpsc;
    use yamabiko_shared::time::FixedClock;

    fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::new(
            FixedOffset::east_opt(9 * 3600)
                .unwrap()
                .with_ymd_and_hms(2025, 1, 1, 9, 0, 0)
                .unwrap(),
        ))
    }

    fn id(value: &str) -> ConnectionId {
        ConnectionId::new(value.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_connect_registers_connection() {
        // テスト項目: 接続が Registry に登録され、接続時刻が Clock から設定される
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let clock = fixed_clock();
        let usecase = ConnectUseCase::new(registry.clone(), clock.clone());
        let (tx, _rx) = mpsc::unbounded_channel();

        // when (操作):
        let result = usecase.execute(id("127.0.0.1:1000"), tx).await;

        // then (期待する結果):
        let connection = result.unwrap();
        assert_eq!(connection.id, id("127.0.0.1:1000"));
        assert_eq!(connection.connected_at, clock.now());
        assert_eq!(registry.snapshot().await, vec![connection]);
    }

    #[tokio::test]
    async fn test_connect_rejects_duplicate_id() {
        // テスト項目: 既に登録済みの ID は DuplicateConnection になる
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let usecase = ConnectUseCase::new(registry.clone(), fixed_clock());
        let (tx1, _rx1) = mpsc::unbounded_channel();
        let (tx2, _rx2) = mpsc::unbounded_channel();
        usecase.execute(id("127.0.0.1:1000"), tx1).await.unwrap();

        // when (操作):
        let result = usecase.execute(id("127.0.0.1:1000"), tx2).await;

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ConnectError::DuplicateConnection(id("127.0.0.1:1000"))
        );
        assert_eq!(registry.size().await, 1);
    }

    #[tokio::test]
    async fn test_connect_registers_exactly_once() {
        // テスト項目: execute 1 回につき register がちょうど 1 回呼ばれる
        // given (前提条件):
        let mut registry = MockConnectionRegistry::new();
        registry
            .expect_register()
            .withf(|conn| conn.id.as_str() == "127.0.0.1:1000")
            .times(1)
            .returning(|_| true);
        registry.expect_size().returning(|| 1);
        let usecase = ConnectUseCase::new(Arc::new(registry), fixed_clock());
        let (tx, _rx) = mpsc::unbounded_channel();

        // when (操作):
        let result = usecase.execute(id("127.0.0.1:1000"), tx).await;

        // then (期待する結果):
        assert!(result.is_ok());
    }
}
