//! WebSocket を使った EventPusher 実装
//!
//! ## 責務
//!
//! - セッションごとの `UnboundedSender` を管理
//! - `ServerEvent` をテキストフレームにエンコードして送信（broadcast）
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、送信にだけ使用します。
//! 送信はチャネルへの投入のみで、呼び出し側をブロックしません。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{EventPushError, EventPusher, PusherChannel, ServerEvent, SessionId},
    infrastructure::dto::conversion::encode_server_event,
};

/// WebSocket を使った EventPusher 実装
///
/// ## 使用例
///
/// ```ignore
/// let pusher = WebSocketEventPusher::new();
/// pusher.register_client(session_id.clone(), tx).await;
/// pusher.broadcast(vec![session_id], &ServerEvent::Clear).await?;
/// ```
#[derive(Default)]
pub struct WebSocketEventPusher {
    /// 接続中のセッションの送信チャネル
    clients: Mutex<HashMap<SessionId, PusherChannel>>,
}

impl WebSocketEventPusher {
    /// 新しい WebSocketEventPusher を作成
    pub fn new() -> Self {
        Self::default()
    }
}

fn encode(event: &ServerEvent) -> Result<String, EventPushError> {
    encode_server_event(event).map_err(|e| EventPushError::PushFailed(e.to_string()))
}

#[async_trait]
impl EventPusher for WebSocketEventPusher {
    async fn register_client(&self, session_id: SessionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        tracing::debug!("Session '{}' registered to EventPusher", session_id);
        clients.insert(session_id, sender);
    }

    async fn unregister_client(&self, session_id: &SessionId) {
        let mut clients = self.clients.lock().await;
        clients.remove(session_id);
        tracing::debug!("Session '{}' unregistered from EventPusher", session_id);
    }

    async fn broadcast(
        &self,
        targets: Vec<SessionId>,
        event: &ServerEvent,
    ) -> Result<usize, EventPushError> {
        let content = encode(event)?;
        let clients = self.clients.lock().await;

        let mut delivered = 0;
        for target in targets {
            match clients.get(&target) {
                // ブロードキャストでは一部の送信失敗を許容
                Some(sender) => match sender.send(content.clone()) {
                    Ok(()) => {
                        delivered += 1;
                        tracing::debug!("Broadcasted event to session '{}'", target);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to push event to session '{}': {}", target, e);
                    }
                },
                None => {
                    tracing::warn!("Session '{}' not found during broadcast, skipping", target);
                }
            }
        }

        Ok(delivered)
    }
}
