//! # トークン発行
//!
//! ログイン成功時に返す Bearer トークンを発行する。
//!
//! 既定の [`StaticTokenIssuer`] は常に同じトークンを返す。
//! 有効期限・一意性・失効は持たない。

use teachereye_domain::{token::AuthToken, user::UserDescriptor};

/// トークン発行を担当するトレイト
pub trait TokenIssuer: Send + Sync {
    /// 認証済みユーザーのトークンを発行する
    fn issue(&self, user: &UserDescriptor) -> AuthToken;
}

/// 固定トークンを返す発行者
#[derive(Debug, Clone)]
pub struct StaticTokenIssuer {
    token: AuthToken,
}

impl StaticTokenIssuer {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: AuthToken::new(token),
        }
    }
}

impl TokenIssuer for StaticTokenIssuer {
    fn issue(&self, _user: &UserDescriptor) -> AuthToken {
        self.token.clone()
    }
}
