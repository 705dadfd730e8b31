//! Server state shared by every handler.

use std::sync::Arc;

use drawtogether_shared::time::Clock;

use crate::{
    domain::{EventPusher, RoomRegistry},
    usecase::{
        ClearCanvasUseCase, ConnectSessionUseCase, DisconnectSessionUseCase,
        GetRoomDetailUseCase, GetRoomsUseCase, JoinRoomUseCase, LeaveRoomUseCase,
        RelayDrawingUseCase,
    },
};

/// Shared application state
pub struct AppState {
    /// ConnectSessionUseCase（セッション接続のユースケース）
    pub connect_session_usecase: Arc<ConnectSessionUseCase>,
    /// DisconnectSessionUseCase（セッション切断のユースケース）
    pub disconnect_session_usecase: Arc<DisconnectSessionUseCase>,
    /// JoinRoomUseCase（ルーム参加のユースケース）
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    /// LeaveRoomUseCase（ルーム退出のユースケース）
    pub leave_room_usecase: Arc<LeaveRoomUseCase>,
    /// RelayDrawingUseCase（描画中継のユースケース）
    pub relay_drawing_usecase: Arc<RelayDrawingUseCase>,
    /// ClearCanvasUseCase（キャンバスクリアのユースケース）
    pub clear_canvas_usecase: Arc<ClearCanvasUseCase>,
    /// GetRoomsUseCase（ルーム一覧取得のユースケース）
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// GetRoomDetailUseCase（ルーム詳細取得のユースケース）
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
}

impl AppState {
    /// Build every use case on top of one registry and one pusher.
    pub fn new(
        registry: Arc<dyn RoomRegistry>,
        pusher: Arc<dyn EventPusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            connect_session_usecase: Arc::new(ConnectSessionUseCase::new(
                registry.clone(),
                pusher.clone(),
                clock.clone(),
            )),
            disconnect_session_usecase: Arc::new(DisconnectSessionUseCase::new(
                registry.clone(),
                pusher.clone(),
            )),
            join_room_usecase: Arc::new(JoinRoomUseCase::new(
                registry.clone(),
                pusher.clone(),
                clock,
            )),
            leave_room_usecase: Arc::new(LeaveRoomUseCase::new(
                registry.clone(),
                pusher.clone(),
            )),
            relay_drawing_usecase: Arc::new(RelayDrawingUseCase::new(
                registry.clone(),
                pusher.clone(),
            )),
            clear_canvas_usecase: Arc::new(ClearCanvasUseCase::new(registry.clone(), pusher)),
            get_rooms_usecase: Arc::new(GetRoomsUseCase::new(registry.clone())),
            get_room_detail_usecase: Arc::new(GetRoomDetailUseCase::new(registry)),
        }
    }
}
