//! # アプリケーション構築
//!
//! DI（認証情報ストア・パスワード検証・トークン発行・State）の初期化と
//! ルーター構築を担当する。`main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    routing::{get, post},
};
use teachereye_domain::{
    password::StoredPassword,
    user::{Email, UserId},
};
use teachereye_infra::{
    CredentialRecord,
    CredentialStore,
    ExactPasswordChecker,
    InMemoryCredentialStore,
    PasswordChecker,
    StaticTokenIssuer,
    TokenIssuer,
};
use teachereye_shared::observability::make_request_span;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::{ApiConfig, ConfigError, SeedAccount},
    handler::{AuthState, HealthState, health_check, login},
    usecase::{AuthUseCase, AuthUseCaseImpl},
};

/// シードアカウント 1 件を登録したインメモリストアを作る
pub fn build_credential_store(seed: &SeedAccount) -> Result<InMemoryCredentialStore, ConfigError> {
    let email = Email::new(&seed.email).map_err(|_| ConfigError::InvalidSeedAccount)?;
    Ok(InMemoryCredentialStore::with_entry(
        email,
        CredentialRecord::new(
            UserId::new(seed.user_id),
            seed.display_name.clone(),
            StoredPassword::new(seed.password.clone()),
        ),
    ))
}

/// 設定から既定構成の認証ユースケースを作る
pub fn build_auth_usecase(config: &ApiConfig) -> Result<AuthUseCaseImpl, ConfigError> {
    let credential_store: Arc<dyn CredentialStore> =
        Arc::new(build_credential_store(&config.seed_account)?);
    let password_checker: Arc<dyn PasswordChecker> = Arc::new(ExactPasswordChecker::new());
    let token_issuer: Arc<dyn TokenIssuer> = Arc::new(StaticTokenIssuer::new(config.token.clone()));

    Ok(AuthUseCaseImpl::new(
        credential_store,
        password_checker,
        token_issuer,
    ))
}

/// 設定から既定構成のアプリケーションを作る
pub fn build_app(config: &ApiConfig) -> Result<Router, ConfigError> {
    let usecase = build_auth_usecase(config)?;
    Ok(build_router(&config.service_name, Arc::new(usecase)))
}

/// ルーターを構築する
///
/// 任意のオリジンからのクロスオリジンリクエストを許可する。
pub fn build_router(service_name: &str, usecase: Arc<dyn AuthUseCase>) -> Router {
    let health_state = Arc::new(HealthState {
        service_name: service_name.to_string(),
    });
    let auth_state = Arc::new(AuthState { usecase });

    Router::new()
        .merge(
            Router::new()
                .route("/api/health", get(health_check))
                .with_state(health_state),
        )
        .route("/api/auth/login", post(login))
        .with_state(auth_state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
