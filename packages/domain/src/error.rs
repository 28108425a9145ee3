//! # ドメイン層エラー定義
//!
//! 入力値がドメインのルールを満たさない場合のエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `MissingField` | 400 Bad Request | メールアドレスまたはパスワードが空 |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// 必須フィールドが空
    ///
    /// どちらのフィールドが空だったかは区別しない。
    #[error("メールアドレスとパスワードは必須です")]
    MissingField,
}
