//! WebSocket client session management.

use std::sync::{Arc, Mutex};

use futures_util::{SinkExt, StreamExt};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{Error as WsError, protocol::Message},
};

use drawtogether_server::infrastructure::dto::conversion::decode_server_event;
use drawtogether_shared::time::now_millis;

use crate::{
    command::parse_command,
    error::ClientError,
    formatter::EventFormatter,
    state::{Action, ClientState},
    ui::{prompt, redisplay_prompt},
};

type SharedPrompt = Arc<Mutex<String>>;

fn current_prompt(shared: &SharedPrompt) -> String {
    shared.lock().map(|p| p.clone()).unwrap_or_default()
}

fn set_prompt(shared: &SharedPrompt, state: &ClientState) {
    if let Ok(mut p) = shared.lock() {
        *p = prompt(state.name(), state.room());
    }
}

/// Effect of one inbound frame on the read loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadOutcome {
    Continue,
    /// The server ended the session with a close frame
    Closed,
    /// The connection broke
    Failed,
}

fn classify(message: &Result<Message, WsError>) -> ReadOutcome {
    match message {
        Ok(Message::Close(_)) => ReadOutcome::Closed,
        Ok(_) => ReadOutcome::Continue,
        Err(_) => ReadOutcome::Failed,
    }
}

/// Run the WebSocket client session
pub async fn run_client_session(url: &str, room: &str, name: &str) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to {}", url);
    println!(
        "\nYou are '{}'. Type /help for commands. Press Ctrl+C to exit.\n",
        name
    );

    let (mut write, mut read) = ws_stream.split();

    let mut state = ClientState::new(room, name);
    if let Some(join) = state.initial_join()? {
        let json = serde_json::to_string(&join)?;
        write
            .send(Message::Text(json.into()))
            .await
            .map_err(|e| ClientError::ConnectionError(e.to_string()))?;
    }

    let shared_prompt: SharedPrompt = Arc::new(Mutex::new(prompt(state.name(), state.room())));

    // Spawn a task to handle incoming events
    let prompt_for_read = shared_prompt.clone();
    let mut read_task = tokio::spawn(async move {
        let mut connection_error = false;

        while let Some(message) = read.next().await {
            match classify(&message) {
                ReadOutcome::Closed => {
                    tracing::info!("Server closed the connection");
                    break;
                }
                ReadOutcome::Failed => {
                    if let Err(e) = &message {
                        tracing::warn!("WebSocket read error: {}", e);
                    }
                    connection_error = true;
                    break;
                }
                ReadOutcome::Continue => {}
            }

            if let Ok(Message::Text(text)) = message {
                let formatted = match decode_server_event(text.as_str()) {
                    Ok(event) => EventFormatter::format_event(&event, now_millis()),
                    Err(e) => {
                        tracing::debug!("Undecodable frame: {}", e);
                        EventFormatter::format_raw_message(text.as_str())
                    }
                };
                print!("{}", formatted);
                redisplay_prompt(&current_prompt(&prompt_for_read));
            }
        }

        connection_error
    });

    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let prompt_for_readline = shared_prompt.clone();
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(&current_prompt(&prompt_for_readline)) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    // Spawn a task that turns typed commands into events
    let prompt_for_write = shared_prompt;
    let mut write_task = tokio::spawn(async move {
        let mut write_error = false;

        'input: while let Some(line) = input_rx.recv().await {
            let action = match parse_command(&line) {
                Ok(command) => state.handle(command),
                Err(e) => {
                    print!("{}", EventFormatter::format_notice(&e.to_string()));
                    continue;
                }
            };

            match action {
                Ok(Action::Send(events)) => {
                    for event in events {
                        let json = match serde_json::to_string(&event) {
                            Ok(json) => json,
                            Err(e) => {
                                tracing::error!("Failed to serialize event: {}", e);
                                continue;
                            }
                        };
                        if let Err(e) = write.send(Message::Text(json.into())).await {
                            tracing::warn!("Failed to send event: {}", e);
                            write_error = true;
                            break 'input;
                        }
                    }
                }
                Ok(Action::Notice(text)) => {
                    print!("{}", EventFormatter::format_notice(&text));
                }
                Ok(Action::Quit) => {
                    let _ = write.send(Message::Close(None)).await;
                    break;
                }
                Err(e) => {
                    tracing::error!("Failed to build event: {}", e);
                }
            }

            set_prompt(&prompt_for_write, &state);
        }

        write_error
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        read_result = &mut read_task => {
            write_task.abort();
            if read_result.unwrap_or(false) {
                return Err(ClientError::ConnectionError("Connection lost".to_string()));
            }
        }
        write_result = &mut write_task => {
            read_task.abort();
            if write_result.unwrap_or(false) {
                return Err(ClientError::ConnectionError("Connection lost".to_string()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_frame_is_a_clean_shutdown() {
        // テスト項目: サーバーからの Close フレームは接続エラーとして扱わない
        // given (前提条件):
        let message: Result<Message, WsError> = Ok(Message::Close(None));

        // when (操作):
        let outcome = classify(&message);

        // then (期待する結果):
        assert_eq!(outcome, ReadOutcome::Closed);
    }

    #[test]
    fn test_read_error_is_a_connection_error() {
        // テスト項目: 読み取りエラーは接続エラーになる
        // given (前提条件):
        let message: Result<Message, WsError> = Err(WsError::ConnectionClosed);

        // when (操作):
        let outcome = classify(&message);

        // then (期待する結果):
        assert_eq!(outcome, ReadOutcome::Failed);
    }

    #[test]
    fn test_text_frame_keeps_reading() {
        // テスト項目: テキストフレームでは読み取りを続ける
        // given (前提条件):
        let message: Result<Message, WsError> =
            Ok(Message::Text(r#"{"event":"clear","data":{}}"#.into()));

        // when (操作):
        let outcome = classify(&message);

        // then (期待する結果):
        assert_eq!(outcome, ReadOutcome::Continue);
    }
}
