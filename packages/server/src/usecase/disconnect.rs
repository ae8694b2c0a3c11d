//! UseCase: 接続の登録解除処理
//!
//! セッションの終了経路（正常クローズ・エラー・キャンセル）はすべてここに合流します。
//! ブロードキャスト失敗で先に削除されている場合もあるため、解除は冪等です。

use std::sync::Arc;

use crate::domain::{Connection, ConnectionRegistry};

/// 接続解除のユースケース
pub struct DisconnectUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl DisconnectUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// 接続を Registry から解除する
    ///
    /// # Returns
    ///
    /// この呼び出しで実際に削除された場合は `true`
    pub async fn execute(&self, connection: &Connection) -> bool {
        let id = &connection.id;
        let removed = self.registry.unregister(connection).await;
        let remaining = self.registry.size().await;

        if removed {
            tracing::info!("Connection '{}' unregistered (remaining: {})", id, remaining);
        } else {
            tracing::debug!(
                "Connection '{}' was already unregistered (remaining: {})",
                id,
                remaining
            );
        }

        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ConnectionId, Envelope, MockConnectionRegistry},
        infrastructure::registry::InMemoryConnectionRegistry,
    };
    use tokio::sync::mpsc;
    use yamabiko_shared::time::{Clock, SystemClock};

    fn connection(value: &str) -> (Connection, mpsc::UnboundedReceiver<Envelope>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = ConnectionId::new(value.to_string()).unwrap();
        (Connection::new(id, tx, SystemClock.now()), rx)
    }

    #[tokio::test]
    async fn test_disconnect_removes_connection() {
        // テスト項目: 登録済みの接続が解除され、残りの接続は維持される
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let (alice, _rx1) = connection("127.0.0.1:1000");
        let (bob, _rx2) = connection("127.0.0.1:2000");
        registry.register(alice.clone()).await;
        registry.register(bob.clone()).await;
        let usecase = DisconnectUseCase::new(registry.clone());

        // when (操作):
        let removed = usecase.execute(&alice).await;

        // then (期待する結果):
        assert!(removed);
        assert_eq!(registry.snapshot().await, vec![bob]);
    }

    #[tokio::test]
    async fn test_disconnect_twice_is_harmless() {
        // テスト項目: 同じ接続を 2 回解除しても 2 回目は件数を変えない
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let (alice, _rx) = connection("127.0.0.1:1000");
        registry.register(alice.clone()).await;
        let usecase = DisconnectUseCase::new(registry.clone());

        // when (操作):
        let first = usecase.execute(&alice).await;
        let second = usecase.execute(&alice).await;

        // then (期待する結果):
        assert!(first);
        assert!(!second);
        assert_eq!(registry.size().await, 0);
    }

    #[tokio::test]
    async fn test_disconnect_calls_unregister_once() {
        // テスト項目: execute 1 回につき unregister がちょうど 1 回呼ばれる
        // given (前提条件):
        let mut registry = MockConnectionRegistry::new();
        registry
            .expect_unregister()
            .withf(|target| target.id.as_str() == "127.0.0.1:1000")
            .times(1)
            .returning(|_| true);
        registry.expect_size().returning(|| 0);
        let usecase = DisconnectUseCase::new(Arc::new(registry));
        let (alice, _rx) = connection("127.0.0.1:1000");

        // when (操作):
        let removed = usecase.execute(&alice).await;

        // then (期待する結果):
        assert!(removed);
    }

    #[tokio::test]
    async fn test_disconnect_of_pruned_session_keeps_reconnected_peer() {
        // テスト項目: 先に削除された古いセッションの終了処理は、同じ ID で再接続した接続を消さない
        // given (前提条件): 古い接続はブロードキャスト失敗で削除済み、同じアドレスから再接続済み
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let (stale, _stale_rx) = connection("127.0.0.1:1000");
        let (reconnected, _rx) = connection("127.0.0.1:1000");
        registry.register(stale.clone()).await;
        registry.unregister(&stale).await;
        registry.register(reconnected.clone()).await;
        let usecase = DisconnectUseCase::new(registry.clone());

        // when (操作):
        let removed = usecase.execute(&stale).await;

        // then (期待する結果):
        assert!(!removed);
        assert_eq!(registry.size().await, 1);
        assert!(registry.snapshot().await[0].same_channel(&reconnected));
    }
}
