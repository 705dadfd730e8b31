//! Event formatting utilities for client display.

use drawtogether_server::domain::ServerEvent;
use drawtogether_shared::time::timestamp_to_local_clock;
use serde_json::Value;

/// Event formatter for client display
pub struct EventFormatter;

impl EventFormatter {
    /// Format an event received from the relay
    ///
    /// # Arguments
    ///
    /// * `event` - The decoded server event
    /// * `received_at` - Unix timestamp when the frame arrived (milliseconds)
    pub fn format_event(event: &ServerEvent, received_at: i64) -> String {
        let clock = timestamp_to_local_clock(received_at);
        match event {
            ServerEvent::System { msg } => format!("\n[{}] * {}\n", clock, msg),
            ServerEvent::Drawing(payload) => {
                format!("\n[{}] ~ {}\n", clock, Self::describe_stroke(payload))
            }
            ServerEvent::Clear => format!("\n[{}] # canvas cleared\n", clock),
        }
    }

    /// Summarise a drawing payload. Drawing data is relayed untouched, so
    /// every field is optional here.
    pub fn describe_stroke(payload: &Value) -> String {
        let who = payload
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("someone");
        let from = payload.get("from").and_then(point);
        let to = payload.get("to").and_then(point);

        let mut line = format!("{} drew", who);
        if let (Some((x1, y1)), Some((x2, y2))) = (from, to) {
            line.push_str(&format!(" ({}, {}) -> ({}, {})", x1, y1, x2, y2));
        }
        if let Some(color) = payload.get("color").and_then(Value::as_str) {
            line.push_str(&format!(" {}", color));
        }
        if let Some(width) = payload.get("width").and_then(Value::as_f64) {
            line.push_str(&format!(" w={}", width));
        }
        line
    }

    /// Format a frame that is not a known event
    pub fn format_raw_message(text: &str) -> String {
        format!("\n← Received: {}\n", text)
    }

    /// Format a local notice (command errors, help)
    pub fn format_notice(text: &str) -> String {
        format!("\n{}\n", text)
    }
}

/// Accept both `{"x": .., "y": ..}` and `[x, y]`
fn point(value: &Value) -> Option<(f64, f64)> {
    match value {
        Value::Object(map) => Some((map.get("x")?.as_f64()?, map.get("y")?.as_f64()?)),
        Value::Array(items) if items.len() >= 2 => Some((items[0].as_f64()?, items[1].as_f64()?)),
        _ => None,
    }
}
