//! # CredentialStore
//!
//! メールアドレスをキーに、登録済みの認証情報を引くストア。
//!
//! ## 設計方針
//!
//! - **トレイトで抽象化**: 実ストア（DB 等）へ差し替えてもユースケースは変わらない
//! - **読み取り専用**: 起動時に構築し、以降は変更しない。ロック不要
//! - **完全一致**: キーの比較は大文字小文字を区別する

use std::collections::HashMap;

use async_trait::async_trait;
use teachereye_domain::{
    password::StoredPassword,
    user::{Email, UserId},
};

use crate::error::InfraError;

/// 登録済み認証情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub user_id:      UserId,
    pub display_name: String,
    pub password:     StoredPassword,
}

impl CredentialRecord {
    pub fn new(user_id: UserId, display_name: impl Into<String>, password: StoredPassword) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            password,
        }
    }
}

/// 認証情報ストアトレイト
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// メールアドレスに対応する認証情報を取得する
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(record))`: 登録されている場合
    /// - `Ok(None)`: 登録されていない場合
    /// - `Err(_)`: ストアへの問い合わせに失敗した場合
    async fn lookup(&self, email: &Email) -> Result<Option<CredentialRecord>, InfraError>;
}

/// インメモリの認証情報ストア
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    entries: HashMap<Email, CredentialRecord>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1 件の認証情報で初期化する
    pub fn with_entry(email: Email, record: CredentialRecord) -> Self {
        let mut store = Self::new();
        store.insert(email, record);
        store
    }

    /// 認証情報を登録する（同じメールアドレスは上書き）
    pub fn insert(&mut self, email: Email, record: CredentialRecord) {
        self.entries.insert(email, record);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn lookup(&self, email: &Email) -> Result<Option<CredentialRecord>, InfraError> {
        Ok(self.entries.get(email).cloned())
    }
}
