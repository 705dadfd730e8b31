//! Repository trait 定義
//!
//! ルームのメンバー管理のインターフェース。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{
    entity::{Room, Session},
    error::RegistryError,
    value_object::{RoomName, SessionId, Timestamp},
};

/// Room Registry trait
///
/// 参加・退出・切断による変更と、配信先メンバーの取得は同じ排他区間で行い、
/// 変更途中の状態が配信に使われないことを実装側が保証する。
#[async_trait]
pub trait RoomRegistry: Send + Sync {
    /// セッションを登録（接続時）
    async fn register_session(
        &self,
        session_id: SessionId,
        connected_at: Timestamp,
    ) -> Result<(), RegistryError>;

    /// セッションを削除し、参加していた全てのルームから外す（切断時）
    ///
    /// 外れたルームの一覧を返す。空になったルームは削除される。
    async fn unregister_session(&self, session_id: &SessionId)
    -> Result<Vec<RoomName>, RegistryError>;

    /// ルームに参加（ルームが無ければ作成）し、参加後のメンバーを返す
    async fn join(
        &self,
        session_id: &SessionId,
        room: &RoomName,
        now: Timestamp,
    ) -> Result<Vec<SessionId>, RegistryError>;

    /// ルームから退出し、残りのメンバーを返す
    ///
    /// 参加していないルームからの退出は何もしない。空になったルームは削除される。
    async fn leave(
        &self,
        session_id: &SessionId,
        room: &RoomName,
    ) -> Result<Vec<SessionId>, RegistryError>;

    /// ルームの現在のメンバー（ルームが無ければ空）
    async fn members(&self, room: &RoomName) -> Vec<SessionId>;

    /// ルームを取得
    async fn get_room(&self, room: &RoomName) -> Option<Room>;

    /// 全てのルームを取得
    async fn list_rooms(&self) -> Vec<Room>;

    /// セッションを取得
    async fn get_session(&self, session_id: &SessionId) -> Option<Session>;
}
