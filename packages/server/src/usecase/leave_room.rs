//! UseCase: ルーム退出処理
//!
//! 退出後、残りのメンバーに `"{name} left {room}"` のシステムメッセージを送る。
//! 参加していないルームからの退出でも、そのルームのメンバーには通知する。

use std::sync::Arc;

use crate::domain::{DisplayName, EventPusher, RoomName, RoomRegistry, ServerEvent, SessionId};

use super::error::BroadcastError;

/// ルーム退出のユースケース
pub struct LeaveRoomUseCase {
    registry: Arc<dyn RoomRegistry>,
    pusher: Arc<dyn EventPusher>,
}

impl LeaveRoomUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>, pusher: Arc<dyn EventPusher>) -> Self {
        Self { registry, pusher }
    }

    /// ルーム退出を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<SessionId>)` - 通知した残りのメンバー
    /// * `Err(BroadcastError)` - セッションが登録されていない
    pub async fn execute(
        &self,
        session_id: &SessionId,
        room: RoomName,
        name: DisplayName,
    ) -> Result<Vec<SessionId>, BroadcastError> {
        let remaining = self.registry.leave(session_id, &room).await?;
        tracing::info!("{} left {}", name, room);

        self.pusher
            .broadcast(remaining.clone(), &ServerEvent::left(&name, &room))
            .await?;

        Ok(remaining)
    }
}
