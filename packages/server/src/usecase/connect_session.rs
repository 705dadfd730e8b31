//! UseCase: セッション接続処理
//!
//! 接続時はセッションを登録するだけで、どのルームにも通知しない。

use std::sync::Arc;

use drawtogether_shared::time::Clock;

use crate::domain::{EventPusher, PusherChannel, RoomRegistry, SessionId, Timestamp};

use super::error::ConnectError;

/// セッション接続のユースケース
pub struct ConnectSessionUseCase {
    /// Registry（メンバー管理の抽象化）
    registry: Arc<dyn RoomRegistry>,
    /// EventPusher（イベント送信の抽象化）
    pusher: Arc<dyn EventPusher>,
    clock: Arc<dyn Clock>,
}

impl ConnectSessionUseCase {
    /// 新しい ConnectSessionUseCase を作成
    pub fn new(
        registry: Arc<dyn RoomRegistry>,
        pusher: Arc<dyn EventPusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry,
            pusher,
            clock,
        }
    }

    /// セッション接続を実行
    ///
    /// # Arguments
    ///
    /// * `session_id` - 新しいセッションの ID
    /// * `sender` - このセッション宛てのイベントを流すチャネル
    ///
    /// # Returns
    ///
    /// * `Ok(Timestamp)` - 接続時刻
    /// * `Err(ConnectError)` - 同じ ID のセッションが既に存在する
    pub async fn execute(
        &self,
        session_id: SessionId,
        sender: PusherChannel,
    ) -> Result<Timestamp, ConnectError> {
        let connected_at = Timestamp::new(self.clock.now_millis());

        // 1. Registry にセッションを登録
        self.registry
            .register_session(session_id.clone(), connected_at)
            .await?;

        // 2. EventPusher に送信チャネルを登録
        self.pusher.register_client(session_id, sender).await;

        Ok(connected_at)
    }
}
