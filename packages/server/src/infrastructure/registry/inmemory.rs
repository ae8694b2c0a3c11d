//! InMemory Connection Registry 実装
//!
//! ドメイン層が定義する ConnectionRegistry trait の具体的な実装。
//! 1 つの Mutex が HashMap と登録順の連番を保護します。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Connection, ConnectionId, ConnectionRegistry};

struct Entry {
    /// 登録順（snapshot の並び順に使う）
    sequence: u64,
    connection: Connection,
}

#[derive(Default)]
struct Inner {
    entries: HashMap<ConnectionId, Entry>,
    next_sequence: u64,
}

/// インメモリ Connection Registry 実装
#[derive(Default)]
pub struct InMemoryConnectionRegistry {
    inner: Mutex<Inner>,
}

impl InMemoryConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn register(&self, connection: Connection) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.entries.contains_key(&connection.id) {
            return false;
        }

        let sequence = inner.next_sequence;
        inner.next_sequence += 1;
        let id = connection.id.clone();
        inner.entries.insert(
            id.clone(),
            Entry {
                sequence,
                connection,
            },
        );
        tracing::debug!(
            "Connection '{}' added to registry (total: {})",
            id,
            inner.entries.len()
        );
        true
    }

    async fn unregister(&self, connection: &Connection) -> bool {
        let mut inner = self.inner.lock().await;
        let current = inner
            .entries
            .get(&connection.id)
            .is_some_and(|entry| entry.connection.same_channel(connection));
        if !current {
            return false;
        }

        inner.entries.remove(&connection.id);
        tracing::debug!(
            "Connection '{}' removed from registry (total: {})",
            connection.id,
            inner.entries.len()
        );
        true
    }

    async fn snapshot(&self) -> Vec<Connection> {
        let mut entries: Vec<(u64, Connection)> = {
            let inner = self.inner.lock().await;
            inner
                .entries
                .values()
                .map(|entry| (entry.sequence, entry.connection.clone()))
                .collect()
        };
        entries.sort_by_key(|(sequence, _)| *sequence);
        entries.into_iter().map(|(_, connection)| connection).collect()
    }

    async fn size(&self) -> usize {
        self.inner.lock().await.entries.len()
    }
}
