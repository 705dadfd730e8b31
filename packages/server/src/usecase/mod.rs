//! UseCase 層
//!
//! ルームブロードキャスタの各操作を 1 つずつユースケースとして実装します。
//! 全てのユースケースは `RoomRegistry` と `EventPusher` の trait にだけ依存します。

pub mod clear_canvas;
pub mod connect_session;
pub mod disconnect_session;
pub mod error;
pub mod get_room_detail;
pub mod get_rooms;
pub mod join_room;
pub mod leave_room;
pub mod relay_drawing;

pub use clear_canvas::ClearCanvasUseCase;
pub use connect_session::ConnectSessionUseCase;
pub use disconnect_session::DisconnectSessionUseCase;
pub use error::{BroadcastError, ConnectError, GetRoomDetailError};
pub use get_room_detail::{GetRoomDetailUseCase, RoomDetail};
pub use get_rooms::GetRoomsUseCase;
pub use join_room::JoinRoomUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use relay_drawing::RelayDrawingUseCase;

#[cfg(test)]
pub(crate) mod test_support {
    //! ユースケースのテストで共有するフィクスチャ

    use std::sync::Arc;

    use drawtogether_shared::time::FixedClock;
    use serde_json::Value;
    use tokio::sync::mpsc;

    use crate::{
        domain::{EventPusher, RoomName, RoomRegistry, SessionId, Timestamp},
        infrastructure::{
            message_pusher::WebSocketEventPusher, repository::InMemoryRoomRegistry,
        },
    };

    pub(crate) const FIXED_NOW: i64 = 1_700_000_000_000;

    pub(crate) struct Fixture {
        pub registry: Arc<InMemoryRoomRegistry>,
        pub pusher: Arc<WebSocketEventPusher>,
        pub clock: Arc<FixedClock>,
    }

    impl Fixture {
        pub(crate) fn new() -> Self {
            Self {
                registry: Arc::new(InMemoryRoomRegistry::new()),
                pusher: Arc::new(WebSocketEventPusher::new()),
                clock: Arc::new(FixedClock::new(FIXED_NOW)),
            }
        }

        /// セッションを登録し、そのセッション宛ての受信側を返す
        pub(crate) async fn connect(
            &self,
            session: &str,
        ) -> (SessionId, mpsc::UnboundedReceiver<String>) {
            let session_id = SessionId::new(session).unwrap();
            let (tx, rx) = mpsc::unbounded_channel();
            self.registry
                .register_session(session_id.clone(), Timestamp::new(FIXED_NOW))
                .await
                .unwrap();
            self.pusher.register_client(session_id.clone(), tx).await;
            (session_id, rx)
        }

        /// 通知を出さずにルームへ参加させる
        pub(crate) async fn join_silently(&self, session_id: &SessionId, room: &str) {
            self.registry
                .join(session_id, &RoomName::new(room), Timestamp::new(FIXED_NOW))
                .await
                .unwrap();
        }
    }

    /// 受信済みのフレームを全て取り出して JSON として返す
    pub(crate) fn drain(rx: &mut mpsc::UnboundedReceiver<String>) -> Vec<Value> {
        let mut frames = Vec::new();
        while let Ok(frame) = rx.try_recv() {
            frames.push(serde_json::from_str(&frame).unwrap());
        }
        frames
    }
}
