//! Integration tests for the relay server running in-process on an ephemeral port.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use drawtogether_server::{
    infrastructure::{
        dto::http::{RoomDetailDto, RoomSummaryDto},
        message_pusher::WebSocketEventPusher,
        repository::InMemoryRoomRegistry,
    },
    ui::{AppState, Server},
};
use drawtogether_shared::time::SystemClock;
use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio::{
    net::{TcpListener, TcpStream},
    time::timeout,
};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

const RECV_TIMEOUT: Duration = Duration::from_secs(2);
const QUIET_PERIOD: Duration = Duration::from_millis(200);

/// Helper struct to manage an in-process server
struct TestServer {
    addr: SocketAddr,
}

impl TestServer {
    /// Start a server on an ephemeral port
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let app_state = AppState::new(
            Arc::new(InMemoryRoomRegistry::new()),
            Arc::new(WebSocketEventPusher::new()),
            Arc::new(SystemClock),
        );
        tokio::spawn(Server::new(app_state).serve(listener, std::future::pending()));

        TestServer { addr }
    }

    fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    fn http_url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn rooms(&self) -> Vec<RoomSummaryDto> {
        reqwest::get(self.http_url("/api/rooms"))
            .await
            .expect("GET /api/rooms failed")
            .json()
            .await
            .expect("Invalid /api/rooms body")
    }

    /// Poll the room list until `predicate` holds or the timeout elapses
    async fn wait_for_rooms(&self, predicate: impl Fn(&[RoomSummaryDto]) -> bool) -> bool {
        let deadline = tokio::time::Instant::now() + RECV_TIMEOUT;
        while tokio::time::Instant::now() < deadline {
            if predicate(&self.rooms().await) {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        false
    }
}

/// Helper struct wrapping one WebSocket connection
struct TestClient {
    ws: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl TestClient {
    async fn connect(server: &TestServer) -> Self {
        let (ws, _response) = connect_async(server.ws_url())
            .await
            .expect("Failed to connect to test server");
        TestClient { ws }
    }

    async fn send_text(&mut self, text: String) {
        self.ws
            .send(Message::Text(text.into()))
            .await
            .expect("Failed to send frame");
    }

    async fn emit(&mut self, event: &str, data: Value) {
        self.send_text(json!({"event": event, "data": data}).to_string())
            .await;
    }

    /// Receive the next text frame as JSON
    async fn recv(&mut self) -> Value {
        loop {
            let frame = timeout(RECV_TIMEOUT, self.ws.next())
                .await
                .expect("Timed out waiting for an event")
                .expect("Connection closed")
                .expect("WebSocket error");
            if let Message::Text(text) = frame {
                return serde_json::from_str(text.as_str()).expect("Frame is not JSON");
            }
        }
    }

    /// Receive the next text frame as it was sent on the wire
    async fn recv_text(&mut self) -> String {
        loop {
            let frame = timeout(RECV_TIMEOUT, self.ws.next())
                .await
                .expect("Timed out waiting for an event")
                .expect("Connection closed")
                .expect("WebSocket error");
            if let Message::Text(text) = frame {
                return text.as_str().to_string();
            }
        }
    }

    /// Assert that nothing arrives for a short while
    async fn assert_silent(&mut self) {
        let next = timeout(QUIET_PERIOD, self.ws.next()).await;
        assert!(next.is_err(), "Expected no event, got {:?}", next);
    }

    async fn join(&mut self, room: &str, name: &str) -> Value {
        self.emit("join", json!({"room": room, "name": name})).await;
        self.recv().await
    }

    async fn close(mut self) {
        let _ = self.ws.close(None).await;
    }
}

fn system(msg: &str) -> Value {
    json!({"event": "system", "data": {"msg": msg}})
}

#[tokio::test]
async fn test_drawing_session_scenario() {
    // テスト項目: 参加・描画・クリアの一連の流れが仕様どおりに配信される
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = TestClient::connect(&server).await;
    let mut bob = TestClient::connect(&server).await;

    // when (操作) / then (期待する結果):
    // Alice joins: only Alice is in the room
    assert_eq!(alice.join("main", "Alice").await, system("Alice joined main"));

    // Bob joins: both receive the notice
    assert_eq!(bob.join("main", "Bob").await, system("Bob joined main"));
    assert_eq!(alice.recv().await, system("Bob joined main"));

    // Alice draws: only Bob receives the verbatim payload
    let stroke = json!({"room": "main", "from": [0, 0], "to": [10, 10]});
    alice.emit("drawing", stroke.clone()).await;
    assert_eq!(bob.recv().await, json!({"event": "drawing", "data": stroke}));
    alice.assert_silent().await;

    // Alice clears: both receive an empty clear
    alice.emit("clear", json!({"room": "main"})).await;
    let clear = json!({"event": "clear", "data": {}});
    assert_eq!(alice.recv().await, clear);
    assert_eq!(bob.recv().await, clear);
}

#[tokio::test]
async fn test_leave_notifies_remaining_members_only() {
    // テスト項目: leave は残りのメンバーにだけ通知される
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = TestClient::connect(&server).await;
    let mut bob = TestClient::connect(&server).await;
    alice.join("main", "Alice").await;
    bob.join("main", "Bob").await;
    alice.recv().await;

    // when (操作):
    alice
        .emit("leave", json!({"room": "main", "name": "Alice"}))
        .await;

    // then (期待する結果):
    assert_eq!(bob.recv().await, system("Alice left main"));
    alice.assert_silent().await;

    // Alice no longer receives drawings for the room
    bob.emit("drawing", json!({"room": "main", "color": "#000"}))
        .await;
    alice.assert_silent().await;
}

#[tokio::test]
async fn test_disconnect_leaves_rooms_silently() {
    // テスト項目: 切断すると全ルームから外れ、退出通知は送られない
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = TestClient::connect(&server).await;
    let mut bob = TestClient::connect(&server).await;
    alice.join("main", "Alice").await;
    alice.join("art", "Alice").await;
    bob.join("main", "Bob").await;
    alice.recv().await;

    // when (操作):
    alice.close().await;

    // then (期待する結果):
    let cleaned = server
        .wait_for_rooms(|rooms| {
            rooms.len() == 1 && rooms[0].id == "main" && rooms[0].member_count == 1
        })
        .await;
    assert!(cleaned, "Alice should be removed from every room");
    bob.assert_silent().await;
}

#[tokio::test]
async fn test_missing_fields_use_defaults() {
    // テスト項目: room / name が無い場合は "main" / "Anon" が使われる
    // given (前提条件):
    let server = TestServer::start().await;
    let mut anon = TestClient::connect(&server).await;
    let mut bob = TestClient::connect(&server).await;

    // when (操作):
    anon.emit("join", json!({})).await;

    // then (期待する結果):
    assert_eq!(anon.recv().await, system("Anon joined main"));
    assert_eq!(bob.join("main", "Bob").await, system("Bob joined main"));
    anon.recv().await;

    // A drawing without a room goes to "main"
    bob.emit("drawing", json!({"width": 3})).await;
    assert_eq!(
        anon.recv().await,
        json!({"event": "drawing", "data": {"width": 3}})
    );

    // A clear without data goes to "main"
    bob.send_text(r#"{"event":"clear"}"#.to_string()).await;
    assert_eq!(anon.recv().await, json!({"event": "clear", "data": {}}));
    assert_eq!(bob.recv().await, json!({"event": "clear", "data": {}}));
}

#[tokio::test]
async fn test_drawing_payload_is_relayed_exactly() {
    // テスト項目: 大きな整数や範囲外の数値を含む描画データも、そのままの文字列で届く
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = TestClient::connect(&server).await;
    let mut bob = TestClient::connect(&server).await;
    alice.join("main", "Alice").await;
    bob.join("main", "Bob").await;
    alice.recv().await;
    let frame = r#"{"event":"drawing","data":{"room":"main","stroke_id":123456789012345678901234567890,"width":1e400}}"#;

    // when (操作):
    alice.send_text(frame.to_string()).await;

    // then (期待する結果):
    assert_eq!(bob.recv_text().await, frame);
}

#[tokio::test]
async fn test_rooms_are_isolated() {
    // テスト項目: 別のルームのイベントは届かない
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = TestClient::connect(&server).await;
    let mut bob = TestClient::connect(&server).await;
    alice.join("art", "Alice").await;
    bob.join("main", "Bob").await;

    // when (操作):
    alice
        .emit("drawing", json!({"room": "art", "to": [1, 1]}))
        .await;
    alice.emit("clear", json!({"room": "art"})).await;

    // then (期待する結果):
    assert_eq!(alice.recv().await, json!({"event": "clear", "data": {}}));
    bob.assert_silent().await;
}

#[tokio::test]
async fn test_malformed_frames_do_not_close_connection() {
    // テスト項目: 不正なフレームや未知のイベントは無視され、接続は維持される
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = TestClient::connect(&server).await;

    // when (操作):
    alice.send_text("not json".to_string()).await;
    alice.emit("cursor", json!({"x": 1})).await;
    alice
        .emit("system", json!({"msg": "spoofed"}))
        .await;

    // then (期待する結果):
    assert_eq!(alice.join("main", "Alice").await, system("Alice joined main"));
}

#[tokio::test]
async fn test_http_room_endpoints() {
    // テスト項目: ヘルスチェックとルーム一覧・詳細 API
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = TestClient::connect(&server).await;
    alice.join("art", "Alice").await;

    // when (操作):
    let health: Value = reqwest::get(server.http_url("/api/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let rooms = server.rooms().await;
    let detail: RoomDetailDto = reqwest::get(server.http_url("/api/rooms/art"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let missing = reqwest::get(server.http_url("/api/rooms/nowhere"))
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(health, json!({"status": "ok"}));
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, "art");
    assert_eq!(rooms[0].member_count, 1);
    assert_eq!(detail.id, "art");
    assert_eq!(detail.members.len(), 1);
    assert_eq!(detail.members[0].session_id, rooms[0].members[0]);
    assert!(detail.created_at.ends_with('Z'));
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
}
