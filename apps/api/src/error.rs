//! # 認証エラー定義
//!
//! ログイン処理で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー種別 | HTTP ステータス | message |
//! |-----------|----------------|---------|
//! | `MissingField` | 400 | `Email and password required` |
//! | `InvalidCredentials` | 401 | `Invalid credentials` |
//! | `Store` | 500 | `Internal server error` |
//!
//! どのフィールドが誤っていたかはレスポンスに含めない。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use teachereye_domain::DomainError;
use teachereye_infra::InfraError;
use thiserror::Error;

/// ログイン失敗レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginFailureResponse {
    pub ok:      bool,
    pub message: String,
}

impl LoginFailureResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            ok:      false,
            message: message.into(),
        }
    }
}

/// ログイン処理で発生するエラー
#[derive(Debug, Error)]
pub enum AuthError {
    /// メールアドレスまたはパスワードが空
    #[error("Email and password required")]
    MissingField,

    /// 認証情報が一致しない
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// 認証情報ストアの障害
    #[error("認証情報ストアエラー: {0}")]
    Store(#[from] InfraError),
}

impl AuthError {
    /// HTTP ステータスコード
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingField => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// クライアントに返すメッセージ
    pub fn public_message(&self) -> &'static str {
        match self {
            AuthError::MissingField => "Email and password required",
            AuthError::InvalidCredentials => "Invalid credentials",
            AuthError::Store(_) => "Internal server error",
        }
    }
}

impl From<DomainError> for AuthError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MissingField => AuthError::MissingField,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if let AuthError::Store(e) = &self {
            // 内部エラーの詳細はログのみ
            tracing::error!(
                error.category = "credential_store",
                "認証情報ストアで内部エラー: {:?}",
                e
            );
        }

        (
            self.status_code(),
            Json(LoginFailureResponse::new(self.public_message())),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    async fn response_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[rstest]
    #[case(AuthError::MissingField, StatusCode::BAD_REQUEST, "Email and password required")]
    #[case(AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED, "Invalid credentials")]
    #[case(
        AuthError::Store(InfraError::store("connection refused")),
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error"
    )]
    #[tokio::test]
    async fn test_エラー種別ごとのレスポンス(
        #[case] error: AuthError,
        #[case] expected_status: StatusCode,
        #[case] expected_message: &str,
    ) {
        let response = error.into_response();

        assert_eq!(response.status(), expected_status);
        assert_eq!(
            response_json(response).await,
            serde_json::json!({ "ok": false, "message": expected_message })
        );
    }

    #[test]
    fn test_ストアエラーの詳細はメッセージに含めない() {
        let error = AuthError::Store(InfraError::store("secret dsn"));

        assert!(!error.public_message().contains("secret dsn"));
    }

    #[test]
    fn test_domain_errorから変換できる() {
        let error: AuthError = DomainError::MissingField.into();

        assert!(matches!(error, AuthError::MissingField));
    }
}
