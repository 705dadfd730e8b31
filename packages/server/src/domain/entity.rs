//! エンティティ: セッションとルーム

use std::collections::HashSet;

use super::value_object::{RoomName, SessionId, Timestamp};

/// 接続中のクライアント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: SessionId,
    pub connected_at: Timestamp,
    /// 現在参加しているルーム
    pub rooms: HashSet<RoomName>,
}

impl Session {
    pub fn new(id: SessionId, connected_at: Timestamp) -> Self {
        Self {
            id,
            connected_at,
            rooms: HashSet::new(),
        }
    }
}

/// 名前付きのマルチキャストグループ
///
/// メンバーは集合として扱い、参加順は持たない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: RoomName,
    pub members: HashSet<SessionId>,
    pub created_at: Timestamp,
}

impl Room {
    pub fn new(name: RoomName, created_at: Timestamp) -> Self {
        Self {
            name,
            members: HashSet::new(),
            created_at,
        }
    }

    /// メンバーを追加する。既に参加済みなら `false`
    pub fn add_member(&mut self, session_id: SessionId) -> bool {
        self.members.insert(session_id)
    }

    /// メンバーを削除する。参加していなければ `false`
    pub fn remove_member(&mut self, session_id: &SessionId) -> bool {
        self.members.remove(session_id)
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// メンバー ID を ID 順で返す
    pub fn member_ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<SessionId> = self.members.iter().cloned().collect();
        ids.sort();
        ids
    }
}
