//! # 認証トークン
//!
//! ログイン成功時にクライアントへ返す Bearer トークン。
//! トークンの検証・失効はこのサービスの責務外。

use derive_more::Display;
use serde::Serialize;

/// 認証トークン（不透明な文字列）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display)]
#[display("{_0}")]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializeで文字列になる() {
        let token = AuthToken::new("demo-token");
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json, serde_json::json!("demo-token"));
    }
}
