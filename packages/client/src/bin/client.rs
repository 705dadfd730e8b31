//! Terminal client for the DrawTogether relay.
//!
//! Joins a room on connect, prints room notices and strokes as they arrive,
//! and turns slash commands into relay events.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin drawtogether-client -- --name Alice
//! cargo run --bin drawtogether-client -- -n Bob -r art
//! ```

use clap::Parser;

use drawtogether_client::run_client_session;
use drawtogether_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "drawtogether-client")]
#[command(about = "Terminal client for the DrawTogether room relay", long_about = None)]
struct Args {
    /// Relay WebSocket URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:5000/ws")]
    url: String,

    /// Room to join on connect
    #[arg(short = 'r', long, default_value = "main")]
    room: String,

    /// Display name announced to the room
    #[arg(short = 'n', long, default_value = "Anon")]
    name: String,
}

#[tokio::main]
async fn main() {
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = run_client_session(&args.url, &args.room, &args.name).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
