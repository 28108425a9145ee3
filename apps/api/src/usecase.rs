//! # ユースケース層
//!
//! ログインのビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: ハンドラのテストでスタブに差し替えられるようトレイトを定義
//! - **依存性注入**: 認証情報ストア・パスワード検証・トークン発行を外部から注入
//! - **薄いハンドラ**: ハンドラは入力の正規化とレスポンス整形のみを行う

pub mod auth;

use async_trait::async_trait;
pub use auth::{AuthUseCaseImpl, LoginOutcome};

use crate::error::AuthError;

/// 認証ユースケーストレイト
#[async_trait]
pub trait AuthUseCase: Send + Sync {
    /// 認証情報ペアを検証し、成功時はユーザー記述子とトークンを返す
    ///
    /// ## 引数
    ///
    /// - `email`: 送信されたメールアドレス（未トリム）
    /// - `password`: 送信されたパスワード
    ///
    /// ## 戻り値
    ///
    /// - `Ok(LoginOutcome)`: 認証成功
    /// - `Err(AuthError::MissingField)`: どちらかが空
    /// - `Err(AuthError::InvalidCredentials)`: 一致しない
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError>;
}

#[async_trait]
impl AuthUseCase for AuthUseCaseImpl {
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        self.login(email, password).await
    }
}
