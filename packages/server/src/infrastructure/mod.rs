//! Infrastructure layer: in-memory registry, WebSocket event pusher and wire DTOs.

pub mod dto;
pub mod message_pusher;
pub mod repository;
