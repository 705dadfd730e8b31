//! Server execution logic.

use std::{future::Future, sync::Arc};

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{
    handler::{get_room_detail, get_rooms, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// WebSocket relay server
///
/// This struct owns the application state and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let state = AppState::new(registry, pusher, Arc::new(SystemClock));
/// Server::new(state).run("0.0.0.0".to_string(), 5000).await?;
/// ```
pub struct Server {
    app_state: Arc<AppState>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(app_state: AppState) -> Self {
        Self {
            app_state: Arc::new(app_state),
        }
    }

    /// Build the router with every endpoint
    pub fn router(&self) -> Router {
        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/rooms", get(get_rooms))
            .route("/api/rooms/{room_id}", get(get_room_detail))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(self.app_state.clone())
    }

    /// Run the relay server until Ctrl+C / SIGTERM
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "0.0.0.0")
    /// * `port` - The port number to bind to (e.g., 5000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!(
            "DrawTogether relay server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
    }
}
