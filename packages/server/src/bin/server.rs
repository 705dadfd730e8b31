//! DrawTogether room relay server.
//!
//! Clients join named rooms over WebSocket and exchange drawing and presence
//! events with the other members of the room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin drawtogether-server
//! cargo run --bin drawtogether-server -- --host 127.0.0.1 --port 3000
//! DRAWTOGETHER_PORT=8080 cargo run --bin drawtogether-server
//! ```

use std::sync::Arc;

use clap::Parser;
use drawtogether_server::{
    infrastructure::{message_pusher::WebSocketEventPusher, repository::InMemoryRoomRegistry},
    ui::{AppState, Server},
};
use drawtogether_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "drawtogether-server")]
#[command(about = "Room-based relay server for shared drawing over WebSocket", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "DRAWTOGETHER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "DRAWTOGETHER_PORT", default_value = "5000")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Registry (in-memory room membership)
    // 2. EventPusher (WebSocket implementation)
    // 3. UseCases (inside AppState)
    // 4. Server
    let registry = Arc::new(InMemoryRoomRegistry::new());
    let pusher = Arc::new(WebSocketEventPusher::new());
    let app_state = AppState::new(registry, pusher, Arc::new(SystemClock));

    let server = Server::new(app_state);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
