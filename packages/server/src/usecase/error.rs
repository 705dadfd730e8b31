//! UseCase error types.

use thiserror::Error;

use crate::domain::{EventPushError, RegistryError};

/// Errors raised while registering a new connection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors raised by room-scoped events (join, leave, drawing, clear)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BroadcastError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Broadcast failed: {0}")]
    Push(#[from] EventPushError),
}

/// Errors raised while looking up a room
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomDetailError {
    #[error("Room '{0}' not found")]
    RoomNotFound(String),
}
