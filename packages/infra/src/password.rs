//! # パスワード検証
//!
//! 入力パスワードと登録済みパスワードの照合を提供する。
//! ハッシュ化は行わない。照合は定数時間のバイト比較で行う。

use subtle::ConstantTimeEq;
use teachereye_domain::password::{PasswordVerifyResult, PlainPassword, StoredPassword};

/// パスワード検証を担当するトレイト
pub trait PasswordChecker: Send + Sync {
    /// パスワードを検証する
    fn verify(&self, password: &PlainPassword, stored: &StoredPassword) -> PasswordVerifyResult;
}

/// 完全一致によるパスワード検証の実装
///
/// 大文字小文字を区別し、空白の正規化も行わない。
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactPasswordChecker;

impl ExactPasswordChecker {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordChecker for ExactPasswordChecker {
    fn verify(&self, password: &PlainPassword, stored: &StoredPassword) -> PasswordVerifyResult {
        let matched: bool = password
            .as_str()
            .as_bytes()
            .ct_eq(stored.as_str().as_bytes())
            .into();
        PasswordVerifyResult::from(matched)
    }
}
