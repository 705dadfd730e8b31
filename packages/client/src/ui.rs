//! UI utilities for the client.

use std::io::Write;

/// Prompt shown while waiting for input
pub fn prompt(name: &str, room: Option<&str>) -> String {
    match room {
        Some(room) => format!("{}@{}> ", name, room),
        None => format!("{}> ", name),
    }
}

/// Redisplay the prompt after printing an incoming event
pub fn redisplay_prompt(prompt: &str) {
    print!("{}", prompt);
    std::io::stdout().flush().ok();
}
