//! # ヘルスチェック共通型
//!
//! ヘルスチェックエンドポイントのレスポンス型を提供する。

use serde::Serialize;

/// ヘルスチェックレスポンス
///
/// `status` は常に `"ok"`、`service` は設定されたサービス名。
///
/// ## 使用例
///
/// ```
/// use teachereye_shared::HealthResponse;
///
/// let response = HealthResponse::ok("teachereye_api");
/// assert_eq!(response.status, "ok");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// 稼働状態
    pub status:  String,
    /// サービス名
    pub service: String,
}

impl HealthResponse {
    /// 稼働中を表すレスポンスを作成する
    pub fn ok(service: impl Into<String>) -> Self {
        Self {
            status:  "ok".to_string(),
            service: service.into(),
        }
    }
}
