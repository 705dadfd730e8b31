//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ClientEvent, SessionId},
    infrastructure::dto::conversion::decode_client_event,
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives encoded events from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound flow: events broadcast to rooms this
/// session belongs to arrive on `rx` and are written to the socket.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

/// Route one inbound event to its use case.
///
/// Failures are logged and never end the connection.
async fn dispatch_event(state: &AppState, session_id: &SessionId, event: ClientEvent) {
    let event_name = event.name();
    let result = match event {
        ClientEvent::Join { room, name } => {
            state
                .join_room_usecase
                .execute(session_id, room, name)
                .await
        }
        ClientEvent::Leave { room, name } => {
            state
                .leave_room_usecase
                .execute(session_id, room, name)
                .await
        }
        ClientEvent::Drawing { room, payload } => {
            state
                .relay_drawing_usecase
                .execute(session_id, room, payload)
                .await
        }
        ClientEvent::Clear { room } => {
            state
                .clear_canvas_usecase
                .execute(session_id, room)
                .await
        }
    };

    if let Err(e) = result {
        tracing::warn!(
            "Failed to handle '{}' from session '{}': {}",
            event_name,
            session_id,
            e
        );
    }
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let session_id = SessionId::generate();

    // Create a channel for this session to receive events
    let (tx, rx) = mpsc::unbounded_channel();

    match state
        .connect_session_usecase
        .execute(session_id.clone(), tx)
        .await
    {
        Ok(_) => tracing::info!("Session '{}' connected", session_id),
        Err(e) => {
            tracing::warn!("Rejecting session '{}': {}", session_id, e);
            return;
        }
    }

    let (sender, mut receiver) = socket.split();

    let session_id_for_recv = session_id.clone();
    let state_for_recv = state.clone();

    // Spawn a task to receive events from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", session_id_for_recv, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => match decode_client_event(text.as_str()) {
                    Ok(event) => {
                        tracing::debug!(
                            "Received '{}' for room '{}' from '{}'",
                            event.name(),
                            event.room(),
                            session_id_for_recv
                        );
                        dispatch_event(&state_for_recv, &session_id_for_recv, event).await;
                    }
                    Err(e) => {
                        tracing::warn!(
                            "Ignoring frame from '{}': {} ({})",
                            session_id_for_recv,
                            e,
                            text.as_str()
                        );
                    }
                },
                Message::Binary(data) => {
                    tracing::debug!(
                        "Ignoring binary frame ({} bytes) from '{}'",
                        data.len(),
                        session_id_for_recv
                    );
                }
                Message::Close(_) => {
                    tracing::info!("Session '{}' requested close", session_id_for_recv);
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                Message::Ping(_) | Message::Pong(_) => {}
            }
        }
    });

    // Spawn a task to push room events to this client
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Disconnect leaves every room without notifying the remaining members
    match state
        .disconnect_session_usecase
        .execute(&session_id)
        .await
    {
        Ok(rooms) => tracing::info!(
            "Session '{}' disconnected and removed from {} room(s)",
            session_id,
            rooms.len()
        ),
        Err(e) => tracing::warn!("Failed to disconnect session '{}': {}", session_id, e),
    }
}
