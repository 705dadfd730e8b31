//! Error types for the DrawTogether client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Outgoing event could not be encoded
    #[error("Failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors raised while parsing a typed command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Commands start with '/'. Type /help for the list")]
    NotACommand,

    #[error("Unknown command '{0}'. Type /help for the list")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),
}
