//! Parsing of typed commands.

use drawtogether_server::infrastructure::dto::websocket::Point;

use crate::error::CommandError;

/// Default stroke colour for `/draw`
pub const DEFAULT_COLOR: &str = "#000000";

/// Default stroke width for `/draw`
pub const DEFAULT_WIDTH: f64 = 4.0;

pub const HELP: &str = "\
Commands:
  /join <room>                          switch to another room
  /leave                                leave the current room
  /draw <x1> <y1> <x2> <y2> [color] [w]  draw a segment (coordinates 0..1)
  /clear                                clear the board for everyone in the room
  /help                                 show this help
  /quit                                 exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Join(String),
    Leave,
    Draw {
        from: Point,
        to: Point,
        color: String,
        width: f64,
    },
    Clear,
    Help,
    Quit,
}

fn number(token: Option<&str>, name: &'static str) -> Result<f64, CommandError> {
    let token = token.ok_or(CommandError::MissingArgument(name))?;
    token
        .parse()
        .map_err(|_| CommandError::InvalidNumber(token.to_string()))
}

/// Parse one input line
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut tokens = line.split_whitespace();
    let head = tokens.next().unwrap_or_default();
    let Some(name) = head.strip_prefix('/') else {
        return Err(CommandError::NotACommand);
    };

    match name {
        "join" => tokens
            .next()
            .map(|room| Command::Join(room.to_string()))
            .ok_or(CommandError::MissingArgument("room")),
        "leave" => Ok(Command::Leave),
        "draw" => {
            let from = Point {
                x: number(tokens.next(), "x1")?,
                y: number(tokens.next(), "y1")?,
            };
            let to = Point {
                x: number(tokens.next(), "x2")?,
                y: number(tokens.next(), "y2")?,
            };
            let color = tokens.next().unwrap_or(DEFAULT_COLOR).to_string();
            let width = match tokens.next() {
                Some(token) => number(Some(token), "width")?,
                None => DEFAULT_WIDTH,
            };
            Ok(Command::Draw {
                from,
                to,
                color,
                width,
            })
        }
        "clear" => Ok(Command::Clear),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}
