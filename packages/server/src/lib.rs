//! DrawTogether room relay server library.
//!
//! Clients join named rooms over WebSocket and exchange drawing and presence
//! events. The server keeps only room membership and fans events out to the
//! members of the target room.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
