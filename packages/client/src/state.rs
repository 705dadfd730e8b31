//! Client-side room state and translation of commands into outgoing events.

use drawtogether_server::infrastructure::dto::websocket::{
    DrawingPayload, EventEnvelope, EventName, MembershipPayload, RoomPayload,
};

use crate::command::{Command, HELP};

/// What the session loop should do after a command
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Send these events in order
    Send(Vec<EventEnvelope>),
    /// Print a local notice without sending anything
    Notice(String),
    Quit,
}

/// The room this client is currently drawing in and the name it uses
#[derive(Debug, Clone)]
pub struct ClientState {
    room: Option<String>,
    name: String,
}

impl ClientState {
    pub fn new(room: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            room: Some(room.into()),
            name: name.into(),
        }
    }

    pub fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `join` sent right after connecting
    pub fn initial_join(&self) -> Result<Option<EventEnvelope>, serde_json::Error> {
        self.room
            .as_deref()
            .map(|room| self.membership(EventName::Join, room))
            .transpose()
    }

    /// Translate a command, updating the current room
    pub fn handle(&mut self, command: Command) -> Result<Action, serde_json::Error> {
        match command {
            Command::Join(room) => {
                let mut events = Vec::new();
                if let Some(current) = self.room.as_deref() {
                    if current == room {
                        return Ok(Action::Notice(format!("Already in '{}'", room)));
                    }
                    events.push(self.membership(EventName::Leave, current)?);
                }
                events.push(self.membership(EventName::Join, &room)?);
                self.room = Some(room);
                Ok(Action::Send(events))
            }
            Command::Leave => match self.room.take() {
                Some(current) => Ok(Action::Send(vec![
                    self.membership(EventName::Leave, &current)?,
                ])),
                None => Ok(Action::Notice(not_in_room())),
            },
            Command::Draw {
                from,
                to,
                color,
                width,
            } => match self.room.as_deref() {
                Some(room) => {
                    let payload = DrawingPayload {
                        room: Some(room.to_string()),
                        from,
                        to,
                        color,
                        width,
                        name: Some(self.name.clone()),
                    };
                    Ok(Action::Send(vec![EventEnvelope::with_payload(
                        EventName::Drawing,
                        &payload,
                    )?]))
                }
                None => Ok(Action::Notice(not_in_room())),
            },
            Command::Clear => match self.room.as_deref() {
                Some(room) => {
                    let payload = RoomPayload {
                        room: Some(room.to_string()),
                    };
                    Ok(Action::Send(vec![EventEnvelope::with_payload(
                        EventName::Clear,
                        &payload,
                    )?]))
                }
                None => Ok(Action::Notice(not_in_room())),
            },
            Command::Help => Ok(Action::Notice(HELP.to_string())),
            Command::Quit => Ok(Action::Quit),
        }
    }

    fn membership(&self, event: EventName, room: &str) -> Result<EventEnvelope, serde_json::Error> {
        let payload = MembershipPayload {
            room: Some(room.to_string()),
            name: Some(self.name.clone()),
        };
        EventEnvelope::with_payload(event, &payload)
    }
}

fn not_in_room() -> String {
    "Not in a room. Use /join <room> first".to_string()
}
