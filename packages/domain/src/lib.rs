//! # TeacherEye ドメイン層
//!
//! ログイン処理で扱う値オブジェクトを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（認証情報ストア、トークン発行）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`credential`] - ログイン要求の認証情報ペア
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`password`] - パスワード関連の値オブジェクト
//! - [`token`] - 認証トークン
//! - [`user`] - ユーザー識別子とユーザー記述子
//!
//! ## 使用例
//!
//! ```rust
//! use teachereye_domain::{DomainError, credential::Credential};
//!
//! let credential = Credential::new("  admin@teachereye.ai ", "admin123").unwrap();
//! assert_eq!(credential.email().as_str(), "admin@teachereye.ai");
//!
//! let missing = Credential::new("   ", "admin123");
//! assert!(matches!(missing, Err(DomainError::MissingField)));
//! ```

pub mod credential;
pub mod error;
pub mod password;
pub mod token;
pub mod user;

pub use error::DomainError;

/// ログ等で機密値の代わりに出力するマスク文字列
pub const REDACTED: &str = "[REDACTED]";
