//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::RoomName,
    infrastructure::dto::http::{MemberDetailDto, RoomDetailDto, RoomSummaryDto},
    ui::state::AppState,
    usecase::GetRoomDetailError,
};
use drawtogether_shared::time::timestamp_to_rfc3339;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of rooms that currently have members
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.get_rooms_usecase.execute().await;

    // Domain Model から DTO への変換
    let room_summaries: Vec<RoomSummaryDto> = rooms
        .into_iter()
        .map(|room| {
            let members: Vec<String> = room
                .member_ids()
                .into_iter()
                .map(|id| id.into_string())
                .collect();
            RoomSummaryDto {
                id: room.name.into_string(),
                member_count: members.len(),
                members,
                created_at: timestamp_to_rfc3339(room.created_at.value()),
            }
        })
        .collect();

    Json(room_summaries)
}

/// Get room detail by ID
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    match state
        .get_room_detail_usecase
        .execute(RoomName::new(room_id))
        .await
    {
        Ok(detail) => {
            // Domain Model から DTO への変換
            let room_detail = RoomDetailDto {
                id: detail.room.name.into_string(),
                members: detail
                    .members
                    .into_iter()
                    .map(|session| MemberDetailDto {
                        session_id: session.id.into_string(),
                        connected_at: timestamp_to_rfc3339(session.connected_at.value()),
                    })
                    .collect(),
                created_at: timestamp_to_rfc3339(detail.room.created_at.value()),
            };
            Ok(Json(room_detail))
        }
        Err(GetRoomDetailError::RoomNotFound(_)) => Err(StatusCode::NOT_FOUND),
    }
}
