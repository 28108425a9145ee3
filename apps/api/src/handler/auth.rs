//! # 認証ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /api/auth/login` - メール/パスワードでログイン
//!
//! ## リクエストボディの扱い
//!
//! JSON として解釈できないボディは `{}` とみなす:
//!
//! - ボディが空、または JSON として不正
//! - `Content-Type` が JSON ではない
//! - トップレベルがオブジェクトではない
//!
//! `email` / `password` が欠けている、または文字列以外の場合は空文字列とみなす。
//! 結果として `400 Email and password required` になる。

use std::{fmt, sync::Arc};

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, header},
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::Value;
use teachereye_domain::{REDACTED, token::AuthToken, user::UserDescriptor};

use crate::{
    error::AuthError,
    usecase::{AuthUseCase, LoginOutcome},
};

/// 認証ハンドラの共有状態
pub struct AuthState {
    pub usecase: Arc<dyn AuthUseCase>,
}

// --- リクエスト/レスポンス型 ---

/// ログインリクエスト（正規化前の生の値）
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginRequest {
    pub email:    String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

impl LoginRequest {
    /// HTTP リクエストから組み立てる。失敗しない
    pub fn from_http(headers: &HeaderMap, body: &[u8]) -> Self {
        if !is_json_content_type(headers) {
            return Self::default();
        }
        Self::from_json_bytes(body)
    }

    /// JSON バイト列から組み立てる。解釈できない部分は空文字列にする
    pub fn from_json_bytes(body: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
        Self {
            email:    string_field(&value, "email"),
            password: string_field(&value, "password"),
        }
    }
}

fn string_field(value: &Value, name: &str) -> String {
    value
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// `application/json` または `application/*+json` かどうか
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// ログイン成功レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginSuccessResponse {
    pub ok:    bool,
    pub user:  UserDescriptor,
    pub token: AuthToken,
}

impl From<LoginOutcome> for LoginSuccessResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            ok:    true,
            user:  outcome.user,
            token: outcome.token,
        }
    }
}

// --- ハンドラ ---

/// POST /api/auth/login
///
/// ## リクエストボディ
///
/// ```json
/// {
///   "email": "admin@teachereye.ai",
///   "password": "admin123"
/// }
/// ```
///
/// ## レスポンス
///
/// - 200: `{"ok":true,"user":{"id":1,"name":"Admin","email":"..."},"token":"demo-token"}`
/// - 400: `{"ok":false,"message":"Email and password required"}`
/// - 401: `{"ok":false,"message":"Invalid credentials"}`
#[tracing::instrument(skip_all)]
pub async fn login(
    State(state): State<Arc<AuthState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AuthError> {
    let req = LoginRequest::from_http(&headers, &body);

    let outcome = state.usecase.login(&req.email, &req.password).await?;

    Ok(Json(LoginSuccessResponse::from(outcome)))
}
