//! UseCase: ルーム参加処理
//!
//! 参加後、参加者本人を含むルームの全メンバーに
//! `"{name} joined {room}"` のシステムメッセージを送る。

use std::sync::Arc;

use drawtogether_shared::time::Clock;

use crate::domain::{
    DisplayName, EventPusher, RoomName, RoomRegistry, ServerEvent, SessionId, Timestamp,
};

use super::error::BroadcastError;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    registry: Arc<dyn RoomRegistry>,
    pusher: Arc<dyn EventPusher>,
    clock: Arc<dyn Clock>,
}

impl JoinRoomUseCase {
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

    /// ルーム参加を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<SessionId>)` - 通知したメンバー（参加者本人を含む）
    /// * `Err(BroadcastError)` - セッションが登録されていない
    pub async fn execute(
        &self,
        session_id: &SessionId,
        room: RoomName,
        name: DisplayName,
    ) -> Result<Vec<SessionId>, BroadcastError> {
        let now = Timestamp::new(self.clock.now_millis());

        // 1. 参加と通知先の確定を同時に行う
        let members = self.registry.join(session_id, &room, now).await?;
        tracing::info!("{} joined {}", name, room);

        // 2. 参加者本人を含めて通知
        self.pusher
            .broadcast(members.clone(), &ServerEvent::joined(&name, &room))
            .await?;

        Ok(members)
    }
}
