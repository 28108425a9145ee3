//! # TeacherEye API サーバー
//!
//! ヘルスチェックとログインを提供するデモ用 API サーバー。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |---------|------|------|
//! | GET | `/api/health` | ヘルスチェック |
//! | POST | `/api/auth/login` | メール/パスワードでログイン |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `127.0.0.1`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `API_DEBUG` | No | デバッグモード（デフォルト: `false`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p teachereye-api
//!
//! API_HOST=0.0.0.0 API_PORT=8080 LOG_FORMAT=json cargo run -p teachereye-api --release
//! ```

use anyhow::Context as _;
use teachereye_api::{app_builder::build_app, config::ApiConfig};
use teachereye_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// TeacherEye API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // 設定読み込み（debug フラグがログレベルに影響するためトレーシングより先）
    let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    // トレーシング初期化
    init_tracing(TracingConfig::from_env(
        config.service_name.clone(),
        config.debug,
    ));
    let _tracing_guard = tracing::info_span!("app", service = %config.service_name).entered();

    let addr = config.bind_addr()?;
    tracing::info!(debug = config.debug, "TeacherEye API サーバーを起動します: {}", addr);

    let app = build_app(&config)?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
    tracing::info!("TeacherEye API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
