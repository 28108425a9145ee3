//! # アプリケーション設定
//!
//! 環境変数から TeacherEye API サーバーの設定を読み込む。
//!
//! 起動時に一度だけ構築し、ルーター構築へ明示的に渡す。グローバル状態は持たない。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `API_HOST` | No | `127.0.0.1` | バインドアドレス |
//! | `API_PORT` | No | `5000` | ポート番号 |
//! | `API_DEBUG` | No | `false` | デバッグモード（ログを詳細化する） |
//!
//! ログ関連の `LOG_FORMAT` / `RUST_LOG` は
//! [`teachereye_shared::observability`] が読み込む。

use std::{env, fmt, net::SocketAddr};

use teachereye_domain::REDACTED;
use thiserror::Error;

/// 既定のサービス名（ヘルスチェックの `service` フィールド）
pub const DEFAULT_SERVICE_NAME: &str = "teachereye_api";

/// 既定の発行トークン
pub const DEFAULT_TOKEN: &str = "demo-token";

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// ポート番号が不正
    #[error("API_PORT は有効なポート番号である必要があります: {value:?}")]
    InvalidPort { value: String },

    /// 真偽値フラグが不正
    #[error("{key} は true/false で指定する必要があります: {value:?}")]
    InvalidFlag { key: &'static str, value: String },

    /// バインドアドレスが不正
    #[error("バインドアドレスが不正です: {0}")]
    InvalidAddress(String),

    /// シードアカウントが不正
    #[error("シードアカウントのメールアドレスが空です")]
    InvalidSeedAccount,
}

/// 起動時に認証情報ストアへ登録する唯一のアカウント
#[derive(Clone, PartialEq, Eq)]
pub struct SeedAccount {
    pub user_id:      i64,
    pub display_name: String,
    pub email:        String,
    pub password:     String,
}

impl Default for SeedAccount {
    fn default() -> Self {
        Self {
            user_id:      1,
            display_name: "Admin".to_string(),
            email:        "admin@teachereye.ai".to_string(),
            password:     "admin123".to_string(),
        }
    }
}

impl fmt::Debug for SeedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedAccount")
            .field("user_id", &self.user_id)
            .field("display_name", &self.display_name)
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

/// TeacherEye API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// デバッグモード
    pub debug:        bool,
    /// ヘルスチェックで返すサービス名
    pub service_name: String,
    /// 認証情報ストアの初期データ
    pub seed_account: SeedAccount,
    /// ログイン成功時に発行するトークン
    pub token:        String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host:         "127.0.0.1".to_string(),
            port:         5000,
            debug:        false,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            seed_account: SeedAccount::default(),
            token:        DEFAULT_TOKEN.to_string(),
        }
    }
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// 未設定の項目はデフォルト値を使う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("API_HOST").unwrap_or(defaults.host);
        let port = match lookup("API_PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => defaults.port,
        };
        let debug = match lookup("API_DEBUG") {
            Some(value) => parse_flag("API_DEBUG", &value)?,
            None => defaults.debug,
        };

        Ok(Self {
            host,
            port,
            debug,
            ..defaults
        })
    }

    /// バインドするソケットアドレスを返す
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}
