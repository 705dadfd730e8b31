//! UseCase: セッション切断処理
//!
//! 切断したセッションは参加中の全てのルームから外れる。
//! 明示的な leave と違い、ルームへの退出通知は送らない。

use std::sync::Arc;

use crate::domain::{EventPusher, RegistryError, RoomName, RoomRegistry, SessionId};

/// セッション切断のユースケース
pub struct DisconnectSessionUseCase {
    /// Registry（メンバー管理の抽象化）
    registry: Arc<dyn RoomRegistry>,
    /// EventPusher（イベント送信の抽象化）
    pusher: Arc<dyn EventPusher>,
}

impl DisconnectSessionUseCase {
    /// 新しい DisconnectSessionUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>, pusher: Arc<dyn EventPusher>) -> Self {
        Self { registry, pusher }
    }

    /// セッション切断を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<RoomName>)` - 外れたルームの一覧
    /// * `Err(RegistryError)` - セッションが登録されていない
    pub async fn execute(&self, session_id: &SessionId) -> Result<Vec<RoomName>, RegistryError> {
        // 1. Registry から削除（全ルームから外れる）
        let result = self.registry.unregister_session(session_id).await;

        // 2. 送信チャネルは登録の有無に関わらず解除する
        self.pusher.unregister_client(session_id).await;

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::test_support::{Fixture, drain};

    fn usecase(fixture: &Fixture) -> DisconnectSessionUseCase {
        DisconnectSessionUseCase::new(fixture.registry.clone(), fixture.pusher.clone())
    }

    #[tokio::test]
    async fn test_disconnect_removes_session_from_every_room() {
        // テスト項目: 切断すると参加中の全てのルームから外れる
        // given (前提条件):
        let fixture = Fixture::new();
        let (alice, _alice_rx) = fixture.connect("alice").await;
        let (bob, _bob_rx) = fixture.connect("bob").await;
        fixture.join_silently(&alice, "main").await;
        fixture.join_silently(&alice, "art").await;
        fixture.join_silently(&bob, "main").await;

        // when (操作):
        let result = usecase(&fixture).execute(&alice).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Ok(vec![RoomName::new("art"), RoomName::new("main")])
        );
        assert_eq!(
            fixture.registry.members(&RoomName::new("main")).await,
            vec![bob]
        );
        assert!(fixture.registry.get_room(&RoomName::new("art")).await.is_none());
        assert!(fixture.registry.get_session(&alice).await.is_none());
    }

    #[tokio::test]
    async fn test_disconnect_sends_no_leave_notification() {
        // テスト項目: 切断では残りのメンバーに退出通知が送られない
        // given (前提条件):
        let fixture = Fixture::new();
        let (alice, _alice_rx) = fixture.connect("alice").await;
        let (bob, mut bob_rx) = fixture.connect("bob").await;
        fixture.join_silently(&alice, "main").await;
        fixture.join_silently(&bob, "main").await;

        // when (操作):
        usecase(&fixture).execute(&alice).await.unwrap();

        // then (期待する結果):
        assert!(drain(&mut bob_rx).is_empty());
    }

    #[tokio::test]
    async fn test_disconnect_unknown_session_fails() {
        // テスト項目: 存在しないセッションの切断はエラーになる
        // given (前提条件):
        let fixture = Fixture::new();
        let ghost = SessionId::new("ghost").unwrap();

        // when (操作):
        let result = usecase(&fixture).execute(&ghost).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RegistryError::SessionNotFound("ghost".to_string()))
        );
    }
}
