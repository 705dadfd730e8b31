//! Domain layer for the room relay.
//!
//! This module contains the membership model and the event vocabulary,
//! independent of the wire format and the transport.

pub mod entity;
pub mod error;
pub mod event;
pub mod message_pusher;
pub mod repository;
pub mod value_object;

pub use entity::{Room, Session};
pub use error::{EventPushError, RegistryError, ValueObjectError};
pub use event::{ClientEvent, ServerEvent};
pub use message_pusher::{EventPusher, PusherChannel};
pub use repository::RoomRegistry;
pub use value_object::{DisplayName, RoomName, SessionId, Timestamp};
