//! # TeacherEye 共有ユーティリティ
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換は各アプリの責務）
//! - ログ初期化系は `observability` feature で有効化する

pub mod health;
pub mod observability;

pub use health::HealthResponse;
