//! # TeacherEye インフラ層
//!
//! ログイン処理が依存する差し替え可能な部品を提供する。
//!
//! ## 責務
//!
//! - **認証情報ストア**: メールアドレスから登録済み認証情報を引く
//! - **パスワード検証**: 入力パスワードと登録済みパスワードを照合する
//! - **トークン発行**: ログイン成功時の Bearer トークンを発行する
//!
//! いずれもトレイトで抽象化し、既定ではインメモリ・固定値の実装を使う。
//! 実ストアや有効期限付きトークンに差し替えても、ユースケース側の契約は変わらない。
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ## 使用例
//!
//! ```rust
//! use teachereye_domain::{password::StoredPassword, user::{Email, UserId}};
//! use teachereye_infra::{CredentialRecord, InMemoryCredentialStore};
//!
//! let store = InMemoryCredentialStore::with_entry(
//!     Email::new("admin@teachereye.ai").unwrap(),
//!     CredentialRecord::new(UserId::new(1), "Admin", StoredPassword::new("admin123")),
//! );
//! assert_eq!(store.len(), 1);
//! ```

pub mod credential_store;
pub mod error;
pub mod password;
pub mod token;

pub use credential_store::{CredentialRecord, CredentialStore, InMemoryCredentialStore};
pub use error::InfraError;
pub use password::{ExactPasswordChecker, PasswordChecker};
pub use token::{StaticTokenIssuer, TokenIssuer};
