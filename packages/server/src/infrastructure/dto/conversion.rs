//! Conversion logic between wire envelopes and domain events.

use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::domain::{ClientEvent, DisplayName, RoomName, ServerEvent};
use crate::infrastructure::dto::websocket::{
    EventEnvelope, EventName, MembershipPayload, RoomPayload, SystemPayload,
};

/// Errors raised while decoding a text frame
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Malformed event frame: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Unsupported event: {0:?}")]
    Unsupported(EventName),
}

/// Decode an inbound text frame into a domain event
pub fn decode_client_event(text: &str) -> Result<ClientEvent, DecodeError> {
    let envelope: EventEnvelope = serde_json::from_str(text)?;
    ClientEvent::try_from(envelope)
}

/// Decode an outbound text frame (used by clients)
pub fn decode_server_event(text: &str) -> Result<ServerEvent, DecodeError> {
    let envelope: EventEnvelope = serde_json::from_str(text)?;
    ServerEvent::try_from(envelope)
}

/// Encode an outbound domain event as a text frame
pub fn encode_server_event(event: &ServerEvent) -> Result<String, serde_json::Error> {
    serde_json::to_string(&EventEnvelope::from(event))
}

// ========================================
// DTO → Domain
// ========================================

impl TryFrom<EventEnvelope> for ClientEvent {
    type Error = DecodeError;

    fn try_from(envelope: EventEnvelope) -> Result<Self, Self::Error> {
        match envelope.event {
            EventName::Join => {
                let payload = membership_payload(envelope.data);
                Ok(Self::Join {
                    room: RoomName::or_default(payload.room),
                    name: DisplayName::or_default(payload.name),
                })
            }
            EventName::Leave => {
                let payload = membership_payload(envelope.data);
                Ok(Self::Leave {
                    room: RoomName::or_default(payload.room),
                    name: DisplayName::or_default(payload.name),
                })
            }
            EventName::Drawing => {
                let payload = match envelope.data {
                    Value::Null => Value::Object(Map::new()),
                    other => other,
                };
                let room = payload
                    .get("room")
                    .and_then(Value::as_str)
                    .map(str::to_owned);
                Ok(Self::Drawing {
                    room: RoomName::or_default(room),
                    payload,
                })
            }
            EventName::Clear => {
                let payload: RoomPayload =
                    serde_json::from_value(envelope.data).unwrap_or_default();
                Ok(Self::Clear {
                    room: RoomName::or_default(payload.room),
                })
            }
            other @ (EventName::System | EventName::Unknown) => {
                Err(DecodeError::Unsupported(other))
            }
        }
    }
}

impl TryFrom<EventEnvelope> for ServerEvent {
    type Error = DecodeError;

    fn try_from(envelope: EventEnvelope) -> Result<Self, Self::Error> {
        match envelope.event {
            EventName::System => {
                let payload: SystemPayload = serde_json::from_value(envelope.data)?;
                Ok(Self::System { msg: payload.msg })
            }
            EventName::Drawing => Ok(Self::Drawing(envelope.data)),
            EventName::Clear => Ok(Self::Clear),
            other => Err(DecodeError::Unsupported(other)),
        }
    }
}

/// Non-object or otherwise unreadable payloads fall back to all defaults
fn membership_payload(data: Value) -> MembershipPayload {
    serde_json::from_value(data).unwrap_or_default()
}

// ========================================
// Domain → DTO
// ========================================

impl From<&ServerEvent> for EventEnvelope {
    fn from(event: &ServerEvent) -> Self {
        match event {
            ServerEvent::System { msg } => Self {
                event: EventName::System,
                data: json!({ "msg": msg }),
            },
            ServerEvent::Drawing(payload) => Self {
                event: EventName::Drawing,
                data: payload.clone(),
            },
            ServerEvent::Clear => Self {
                event: EventName::Clear,
                data: Value::Object(Map::new()),
            },
        }
    }
}
