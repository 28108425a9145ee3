//! # TeacherEye API ライブラリ
//!
//! ヘルスチェックとログインを提供する HTTP サーバーのコアモジュール。
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - 依存コンポーネントの初期化とルーター構築
//! - [`config`] - サーバー設定（環境変数からの読み込み）
//! - [`error`] - 認証エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - ログインのビジネスロジック
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use teachereye_api::{app_builder::build_app, config::ApiConfig};
//!
//! let config = ApiConfig::from_env()?;
//! let app = build_app(&config)?;
//! ```

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
