//! # ユーザー
//!
//! ログイン成功時に返すユーザー記述子と、その識別子を定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 用途 |
//! |---|------------|------|
//! | [`UserId`] | ユーザー ID | 認証情報ストアのレコードが持つ数値 ID |
//! | [`Email`] | メールアドレス | ログイン ID（前後の空白を除去した値） |
//! | [`UserDescriptor`] | ユーザー記述子 | ログイン成功時に返す最小限の識別情報 |
//!
//! ユーザーは永続化されない。記述子はログイン成功のたびに新しく組み立てる。

use derive_more::Display;
use serde::Serialize;

use crate::DomainError;

/// ユーザー ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[display("{_0}")]
pub struct UserId(i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// メールアドレス（値オブジェクト）
///
/// 生成時に前後の空白を除去する。形式の検証は行わず、
/// 除去後に空でないことだけを要求する。比較は大文字小文字を区別する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// # エラー
    ///
    /// トリム後に空文字列となる場合は `DomainError::MissingField` を返す。
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::MissingField);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// ユーザー記述子
///
/// `email` には認証情報ストアの値ではなく、送信されたメールアドレス（トリム済み）を入れる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDescriptor {
    pub id:    UserId,
    pub name:  String,
    pub email: Email,
}

impl UserDescriptor {
    pub fn new(id: UserId, name: impl Into<String>, email: Email) -> Self {
        Self {
            id,
            name: name.into(),
            email,
        }
    }
}
