//! InMemory Room Registry 実装
//!
//! ドメイン層が定義する RoomRegistry trait の具体的な実装。
//! セッション → ルーム、ルーム → メンバーの 2 つの HashMap を
//! 1 つの Mutex で保護し、常に整合した状態に保ちます。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{RegistryError, Room, RoomName, RoomRegistry, Session, SessionId, Timestamp};

#[derive(Debug, Default)]
struct RegistryState {
    sessions: HashMap<SessionId, Session>,
    rooms: HashMap<RoomName, Room>,
}

impl RegistryState {
    /// ルームからセッションを外し、空になったルームを削除する
    fn detach(&mut self, session_id: &SessionId, room_name: &RoomName) {
        let now_empty = match self.rooms.get_mut(room_name) {
            Some(room) => {
                room.remove_member(session_id);
                room.is_empty()
            }
            None => false,
        };
        if now_empty {
            self.rooms.remove(room_name);
            tracing::debug!("Room '{}' is empty and was removed", room_name);
        }
    }
}

/// インメモリ Room Registry 実装
#[derive(Debug, Default)]
pub struct InMemoryRoomRegistry {
    state: Mutex<RegistryState>,
}

impl InMemoryRoomRegistry {
    /// 空の InMemoryRoomRegistry を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomRegistry for InMemoryRoomRegistry {
    async fn register_session(
        &self,
        session_id: SessionId,
        connected_at: Timestamp,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.lock().await;
        if state.sessions.contains_key(&session_id) {
            return Err(RegistryError::SessionAlreadyRegistered(
                session_id.into_string(),
            ));
        }
        state
            .sessions
            .insert(session_id.clone(), Session::new(session_id, connected_at));
        Ok(())
    }

    async fn unregister_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<RoomName>, RegistryError> {
        let mut state = self.state.lock().await;
        let session = state
            .sessions
            .remove(session_id)
            .ok_or_else(|| RegistryError::SessionNotFound(session_id.to_string()))?;

        let mut left_rooms: Vec<RoomName> = session.rooms.into_iter().collect();
        left_rooms.sort();
        for room_name in &left_rooms {
            state.detach(session_id, room_name);
        }
        Ok(left_rooms)
    }

    async fn join(
        &self,
        session_id: &SessionId,
        room: &RoomName,
        now: Timestamp,
    ) -> Result<Vec<SessionId>, RegistryError> {
        let mut state = self.state.lock().await;
        let session = state
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| RegistryError::SessionNotFound(session_id.to_string()))?;
        session.rooms.insert(room.clone());

        let entry = state
            .rooms
            .entry(room.clone())
            .or_insert_with(|| Room::new(room.clone(), now));
        entry.add_member(session_id.clone());
        Ok(entry.member_ids())
    }

    async fn leave(
        &self,
        session_id: &SessionId,
        room: &RoomName,
    ) -> Result<Vec<SessionId>, RegistryError> {
        let mut state = self.state.lock().await;
        let session = state
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| RegistryError::SessionNotFound(session_id.to_string()))?;
        session.rooms.remove(room);

        state.detach(session_id, room);
        Ok(state
            .rooms
            .get(room)
            .map(Room::member_ids)
            .unwrap_or_default())
    }

    async fn members(&self, room: &RoomName) -> Vec<SessionId> {
        let state = self.state.lock().await;
        state
            .rooms
            .get(room)
            .map(Room::member_ids)
            .unwrap_or_default()
    }

    async fn get_room(&self, room: &RoomName) -> Option<Room> {
        let state = self.state.lock().await;
        state.rooms.get(room).cloned()
    }

    async fn list_rooms(&self) -> Vec<Room> {
        let state = self.state.lock().await;
        let mut rooms: Vec<Room> = state.rooms.values().cloned().collect();
        rooms.sort_by(|a, b| a.name.cmp(&b.name));
        rooms
    }

    async fn get_session(&self, session_id: &SessionId) -> Option<Session> {
        let state = self.state.lock().await;
        state.sessions.get(session_id).cloned()
    }
}
