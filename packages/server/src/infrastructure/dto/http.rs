//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Room summary for list API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub id: String,
    pub members: Vec<String>,
    pub member_count: usize,
    pub created_at: String,
}

/// Member detail for room detail API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDetailDto {
    pub session_id: String,
    pub connected_at: String,
}

/// Room detail for detail API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub id: String,
    pub members: Vec<MemberDetailDto>,
    pub created_at: String,
}
