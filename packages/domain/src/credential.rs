//! # 認証情報ペア
//!
//! ログイン要求ごとに組み立てる `(email, password)` の組。永続化しない。
//!
//! ## 正規化ルール
//!
//! - メールアドレスは前後の空白を除去する
//! - パスワードはそのまま保持する
//! - どちらかが空なら [`DomainError::MissingField`]

use crate::{DomainError, password::PlainPassword, user::Email};

/// 正規化済みの認証情報ペア
#[derive(Debug, Clone)]
pub struct Credential {
    email:    Email,
    password: PlainPassword,
}

impl Credential {
    /// 生の入力値から認証情報ペアを作成する
    ///
    /// # エラー
    ///
    /// トリム後のメールアドレス、またはパスワードが空の場合は
    /// `DomainError::MissingField` を返す。
    pub fn new(email: &str, password: impl Into<String>) -> Result<Self, DomainError> {
        let email = Email::new(email)?;
        let password = PlainPassword::new(password);
        if password.is_empty() {
            return Err(DomainError::MissingField);
        }
        Ok(Self { email, password })
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &PlainPassword {
        &self.password
    }
}
