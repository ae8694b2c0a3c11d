//! UseCase: メッセージの中継処理（エコー + ブロードキャスト）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RelayMessageUseCase::execute() メソッド
//! - 送信者へのエコー、他の全接続へのブロードキャスト、送信失敗した接続の削除
//!
//! ### どのような状況を想定しているか
//! - 正常系：3 接続でのエコーとブロードキャスト
//! - エッジケース：送信者のみが接続している場合（ブロードキャストしない）
//! - エッジケース：snapshot と削除の間に、同じ ID で再接続された場合（新しい接続は残す）
//! - 異常系：他の接続が既に切れている場合、送信者自身が切れている場合

use std::sync::Arc;

use yamabiko_shared::time::{Clock, format_clock_time};

use crate::domain::{Connection, ConnectionId, ConnectionRegistry, Envelope, MessageText};

use super::error::RelayError;

/// Outcome of the broadcast pass for one message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayReport {
    /// Connections the broadcast was queued for
    pub delivered: Vec<ConnectionId>,
    /// Connections whose push failed; they have been unregistered
    pub pruned: Vec<ConnectionId>,
}

/// メッセージ中継のユースケース
pub struct RelayMessageUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    clock: Arc<dyn Clock>,
    /// エコーの `server` フィールドに入れるバナー
    banner: String,
}

impl RelayMessageUseCase {
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        clock: Arc<dyn Clock>,
        banner: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            clock,
            banner: banner.into(),
        }
    }

    /// 受信した 1 メッセージを中継する
    ///
    /// 1. 送信者にエコーを返す（失敗したら `RelayError::EchoFailed`）
    /// 2. 他に接続があれば snapshot の全接続（送信者以外）にブロードキャスト
    /// 3. ブロードキャストに失敗した接続を Registry から削除
    ///
    /// # Returns
    ///
    /// * `Ok(RelayReport)` - ブロードキャスト先と削除した接続
    /// * `Err(RelayError)` - エコー失敗（この接続のセッションは終了すべき）
    pub async fn execute(
        &self,
        sender: &Connection,
        text: MessageText,
    ) -> Result<RelayReport, RelayError> {
        let timestamp = format_clock_time(&self.clock.now());

        // 1. エコー
        sender.push(Envelope::echo(
            text.clone(),
            timestamp.clone(),
            sender.id.clone(),
            self.banner.clone(),
        ))?;
        tracing::debug!("Echoed message back to '{}'", sender.id);

        // 2. ブロードキャスト（自分しかいなければ省略）
        if self.registry.size().await <= 1 {
            return Ok(RelayReport::default());
        }

        let broadcast = Envelope::broadcast(sender.id.clone(), text, timestamp);
        let (report, failed) = self.fan_out(sender, broadcast).await;

        // 3. 送信に失敗した接続を削除（snapshot 時点のハンドルで照合する）
        for target in &failed {
            self.registry.unregister(target).await;
        }

        tracing::info!(
            "Broadcasted message from '{}' to {} connection(s), pruned {}",
            sender.id,
            report.delivered.len(),
            report.pruned.len()
        );

        Ok(report)
    }

    /// Push the envelope to every connection in a fresh snapshot except the sender.
    ///
    /// Returns the report together with the handles whose push failed.
    async fn fan_out(
        &self,
        sender: &Connection,
        envelope: Envelope,
    ) -> (RelayReport, Vec<Connection>) {
        let mut report = RelayReport::default();
        let mut failed = Vec::new();

        for target in self.registry.snapshot().await {
            if target.id == sender.id {
                continue;
            }

            match target.push(envelope.clone()) {
                Ok(()) => report.delivered.push(target.id),
                Err(e) => {
                    tracing::warn!("Failed to broadcast to '{}': {}", target.id, e);
                    report.pruned.push(target.id.clone());
                    failed.push(target);
                }
            }
        }

        (report, failed)
    }
}
