//! Domain error types.

use thiserror::Error;

/// Errors raised while constructing value objects
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("Session ID cannot be empty")]
    SessionIdEmpty,
}

/// Errors raised by the room registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Session '{0}' is already registered")]
    SessionAlreadyRegistered(String),

    #[error("Session '{0}' not found")]
    SessionNotFound(String),
}

/// Errors raised while pushing events to clients
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventPushError {
    #[error("Failed to push event: {0}")]
    PushFailed(String),
}
