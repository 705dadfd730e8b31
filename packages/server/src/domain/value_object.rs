//! 値オブジェクト
//!
//! ルーム名と表示名は欠落時のデフォルト値を持つ。入力の欠落でイベント処理を
//! 失敗させないため、これらの生成は失敗しない。

use std::fmt;

use uuid::Uuid;

use super::error::ValueObjectError;

/// ルーム名が指定されなかったときに使うルーム
pub const DEFAULT_ROOM_NAME: &str = "main";

/// 表示名が指定されなかったときに使う名前
pub const DEFAULT_DISPLAY_NAME: &str = "Anon";

/// 接続ごとに一意なセッション ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(String);

impl SessionId {
    /// 既存の文字列からセッション ID を作成（空文字列は不可）
    pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValueObjectError::SessionIdEmpty);
        }
        Ok(Self(value))
    }

    /// UUID v4 で新しいセッション ID を払い出す
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ルーム名
///
/// 任意の文字列を受け付ける（空文字列もそのまま保持する）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomName(String);

impl RoomName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 欠落していれば `"main"` を使う
    pub fn or_default(value: Option<String>) -> Self {
        value.map(Self).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for RoomName {
    fn default() -> Self {
        Self(DEFAULT_ROOM_NAME.to_string())
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// イベントごとに送られてくる表示名（セッションには紐付かない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 欠落していれば `"Anon"` を使う
    pub fn or_default(value: Option<String>) -> Self {
        value.map(Self).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DisplayName {
    fn default() -> Self {
        Self(DEFAULT_DISPLAY_NAME.to_string())
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unix タイムスタンプ（ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
