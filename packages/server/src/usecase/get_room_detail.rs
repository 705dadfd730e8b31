//! UseCase: ルーム詳細取得

use std::sync::Arc;

use crate::domain::{Room, RoomName, RoomRegistry, Session};

use super::error::GetRoomDetailError;

/// ルームとそのメンバーのセッション情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDetail {
    pub room: Room,
    /// セッション ID 順
    pub members: Vec<Session>,
}

/// ルーム詳細取得のユースケース
pub struct GetRoomDetailUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl GetRoomDetailUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// ルーム詳細を取得
    ///
    /// # Returns
    ///
    /// * `Ok(RoomDetail)` - ルームとメンバー
    /// * `Err(GetRoomDetailError::RoomNotFound)` - ルームが存在しない
    pub async fn execute(&self, room_name: RoomName) -> Result<RoomDetail, GetRoomDetailError> {
        let room = self
            .registry
            .get_room(&room_name)
            .await
            .ok_or_else(|| GetRoomDetailError::RoomNotFound(room_name.into_string()))?;

        let mut members = Vec::with_capacity(room.members.len());
        for session_id in room.member_ids() {
            // 取得の間に切断したセッションは含めない
            if let Some(session) = self.registry.get_session(&session_id).await {
                members.push(session);
            }
        }

        Ok(RoomDetail { room, members })
    }
}
