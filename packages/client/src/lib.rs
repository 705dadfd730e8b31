//! Terminal client for DrawTogether.
//!
//! Joins a room on the relay server, sends line segments and clear requests
//! typed as commands, and prints the room's events as they arrive.

pub mod command;
pub mod error;
pub mod formatter;
pub mod session;
pub mod state;
pub mod ui;

pub use session::run_client_session;
