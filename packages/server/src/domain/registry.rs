//! Connection registry trait 定義
//!
//! セッション同士が共有する唯一の可変状態へのインターフェースです。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::Connection;

/// Connection registry trait
///
/// A connection is present iff its session has completed registration and has
/// not yet completed unregistration. Implementations serialise every operation
/// behind a single lock so concurrent sessions always observe committed state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// Add a connection. Returns `false` without changes if its id is already present.
    async fn register(&self, connection: Connection) -> bool;

    /// Remove a connection. Returns `false` if it was not present; never fails.
    ///
    /// The entry under the connection's id is removed only if it is this very
    /// connection, so a stale handle never removes a newer session that
    /// reconnected from the same address.
    async fn unregister(&self, connection: &Connection) -> bool;

    /// Point-in-time copy of the live connections, oldest registration first
    async fn snapshot(&self) -> Vec<Connection>;

    /// Current number of connections (advisory)
    async fn size(&self) -> usize;
}
