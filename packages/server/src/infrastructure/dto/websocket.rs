//! WebSocket event DTOs.
//!
//! Every text frame carries one named event:
//!
//! ```json
//! {"event": "join", "data": {"room": "main", "name": "Alice"}}
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Event names used on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventName {
    Join,
    Leave,
    Drawing,
    Clear,
    System,
    #[serde(other)]
    Unknown,
}

/// Envelope for a single named event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub event: EventName,
    #[serde(default)]
    pub data: Value,
}

impl EventEnvelope {
    /// Wrap a typed payload into an envelope
    pub fn with_payload<T: Serialize>(
        event: EventName,
        payload: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            event,
            data: serde_json::to_value(payload)?,
        })
    }
}

/// Payload of `join` and `leave`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipPayload {
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub room: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
}

/// Payload of `clear` (inbound)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPayload {
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub room: Option<String>,
}

/// Payload of `system` (outbound)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemPayload {
    pub msg: String,
}

/// Normalised canvas coordinate (0..1 on both axes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Line segment as drawn by clients.
///
/// The server never decodes drawings into this type; it only exists so that
/// clients agree on a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    pub from: Point,
    pub to: Point,
    pub color: String,
    pub width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Keep the field only when it is a JSON string; anything else counts as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(value) => Ok(Some(value)),
        _ => Ok(None),
    }
}
