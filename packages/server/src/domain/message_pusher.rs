//! EventPusher trait 定義
//!
//! クライアントへのイベント送信の抽象化。
//! 具体的な実装（WebSocket など）は Infrastructure 層が提供します。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{error::EventPushError, event::ServerEvent, value_object::SessionId};

/// クライアントごとの送信チャネル（エンコード済みのテキストフレームを流す）
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// イベント送信 trait
///
/// 送信はノンブロッキングで、到達保証はない（at-most-once）。
#[async_trait]
pub trait EventPusher: Send + Sync {
    /// セッションの送信チャネルを登録
    async fn register_client(&self, session_id: SessionId, sender: PusherChannel);

    /// セッションの送信チャネルを登録解除
    async fn unregister_client(&self, session_id: &SessionId);

    /// 複数のセッションにイベントを送信
    ///
    /// 一部の宛先への送信失敗は他の宛先への配信を止めない。
    /// 戻り値は実際に送信できた宛先の数。
    async fn broadcast(
        &self,
        targets: Vec<SessionId>,
        event: &ServerEvent,
    ) -> Result<usize, EventPushError>;
}
