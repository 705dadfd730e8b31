//! UseCase: ルーム一覧取得

use std::sync::Arc;

use crate::domain::{Room, RoomRegistry};

/// ルーム一覧取得のユースケース
pub struct GetRoomsUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl GetRoomsUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// 現在存在するルームをルーム名順で返す（空のルームは存在しない）
    pub async fn execute(&self) -> Vec<Room> {
        self.registry.list_rooms().await
    }
}
