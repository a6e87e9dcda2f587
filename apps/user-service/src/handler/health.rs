//! # ヘルスチェックハンドラ
//!
//! レスポンス型は [`triad_shared::HealthResponse`] を参照。

use axum::Json;
use triad_shared::HealthResponse;

use crate::SERVICE_NAME;

/// User Service のヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok(SERVICE_NAME))
}
