//! UseCase: キャンバスのクリア
//!
//! 送信者を含むルームの全メンバーに空ペイロードの `clear` を送る。

use std::sync::Arc;

use crate::domain::{EventPusher, RoomName, RoomRegistry, ServerEvent, SessionId};

use super::error::BroadcastError;

/// キャンバスクリアのユースケース
pub struct ClearCanvasUseCase {
    registry: Arc<dyn RoomRegistry>,
    pusher: Arc<dyn EventPusher>,
}

impl ClearCanvasUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>, pusher: Arc<dyn EventPusher>) -> Self {
        Self { registry, pusher }
    }

    /// クリアを実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<SessionId>)` - 通知したメンバー（メンバーであれば送信者を含む）
    pub async fn execute(
        &self,
        from: &SessionId,
        room: RoomName,
    ) -> Result<Vec<SessionId>, BroadcastError> {
        let members = self.registry.members(&room).await;
        tracing::info!("Session '{}' cleared '{}'", from, room);

        self.pusher
            .broadcast(members.clone(), &ServerEvent::Clear)
            .await?;

        Ok(members)
    }
}
