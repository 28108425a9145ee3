//! # ヘルスチェックハンドラ
//!
//! サーバーの稼働状態を返す。依存コンポーネントの状態は確認しない。
//!
//! レスポンス型は [`teachereye_shared::HealthResponse`] を参照。

use std::sync::Arc;

use axum::{Json, extract::State};
use teachereye_shared::HealthResponse;

/// ヘルスチェックハンドラの共有状態
#[derive(Debug, Clone)]
pub struct HealthState {
    pub service_name: String,
}

/// GET /api/health
///
/// ```text
/// $ curl http://127.0.0.1:5000/api/health
/// {"status":"ok","service":"teachereye_api"}
/// ```
pub async fn health_check(State(state): State<Arc<HealthState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.service_name.clone()))
}
