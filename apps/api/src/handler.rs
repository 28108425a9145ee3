//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ビジネスロジックは usecase 層に委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック（`GET /api/health`）
//! - `auth`: ログイン（`POST /api/auth/login`）

pub mod auth;
pub mod health;

pub use auth::{AuthState, LoginRequest, LoginSuccessResponse, login};
pub use health::{HealthState, health_check};
