//! UseCase: 描画データの中継
//!
//! 描画データは解釈せずに、送信者以外のルームメンバーへそのまま転送する。
//! 状態は一切変更しない。

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{EventPusher, RoomName, RoomRegistry, ServerEvent, SessionId};

use super::error::BroadcastError;

/// 描画中継のユースケース
pub struct RelayDrawingUseCase {
    registry: Arc<dyn RoomRegistry>,
    pusher: Arc<dyn EventPusher>,
}

impl RelayDrawingUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>, pusher: Arc<dyn EventPusher>) -> Self {
        Self { registry, pusher }
    }

    /// 描画データの中継を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<SessionId>)` - 転送先（送信者を除くルームメンバー）
    pub async fn execute(
        &self,
        from: &SessionId,
        room: RoomName,
        payload: Value,
    ) -> Result<Vec<SessionId>, BroadcastError> {
        let targets: Vec<SessionId> = self
            .registry
            .members(&room)
            .await
            .into_iter()
            .filter(|id| id != from)
            .collect();

        tracing::debug!(
            "Relaying drawing from '{}' to {} member(s) of '{}'",
            from,
            targets.len(),
            room
        );
        self.pusher
            .broadcast(targets.clone(), &ServerEvent::Drawing(payload))
            .await?;

        Ok(targets)
    }
}
