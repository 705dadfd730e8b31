//! イベント定義
//!
//! - `ClientEvent`: クライアントから届くルーム宛てのイベント
//! - `ServerEvent`: ルームのメンバーへ配信するイベント

use serde_json::Value;

use super::value_object::{DisplayName, RoomName};

/// クライアントから届くイベント（デフォルト値は適用済み）
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    Join { room: RoomName, name: DisplayName },
    Leave { room: RoomName, name: DisplayName },
    /// 描画データはサーバーでは解釈せず、そのまま中継する
    Drawing { room: RoomName, payload: Value },
    Clear { room: RoomName },
}

impl ClientEvent {
    /// 宛先のルーム
    pub fn room(&self) -> &RoomName {
        match self {
            Self::Join { room, .. }
            | Self::Leave { room, .. }
            | Self::Drawing { room, .. }
            | Self::Clear { room } => room,
        }
    }

    /// ログ用のイベント名
    pub fn name(&self) -> &'static str {
        match self {
            Self::Join { .. } => "join",
            Self::Leave { .. } => "leave",
            Self::Drawing { .. } => "drawing",
            Self::Clear { .. } => "clear",
        }
    }
}

/// メンバーに配信するイベント
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    System { msg: String },
    Drawing(Value),
    Clear,
}

impl ServerEvent {
    pub fn joined(name: &DisplayName, room: &RoomName) -> Self {
        Self::System {
            msg: format!("{} joined {}", name, room),
        }
    }

    pub fn left(name: &DisplayName, room: &RoomName) -> Self {
        Self::System {
            msg: format!("{} left {}", name, room),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_and_left_messages() {
        // テスト項目: 参加・退出のシステムメッセージの文言
        // given (前提条件):
        let name = DisplayName::new("Alice");
        let room = RoomName::default();

        // when (操作):
        let joined = ServerEvent::joined(&name, &room);
        let left = ServerEvent::left(&name, &room);

        // then (期待する結果):
        assert_eq!(
            joined,
            ServerEvent::System {
                msg: "Alice joined main".to_string()
            }
        );
        assert_eq!(
            left,
            ServerEvent::System {
                msg: "Alice left main".to_string()
            }
        );
    }

    #[test]
    fn test_client_event_room() {
        // テスト項目: どのイベントからも宛先ルームを取り出せる
        // given (前提条件):
        let event = ClientEvent::Drawing {
            room: RoomName::new("art"),
            payload: Value::Null,
        };

        // when (操作):
        let room = event.room();

        // then (期待する結果):
        assert_eq!(room.as_str(), "art");
        assert_eq!(event.name(), "drawing");
    }
}
