//! # Auth Service アプリケーション構築
//!
//! State を受け取り、ルーターとミドルウェアを組み立てる。
//! ルーターは値として返すため、テストから同じ構成をそのまま駆動できる。

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use triad_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
    request::MAX_REQUEST_BODY_BYTES,
};

use crate::{
    SERVICE_NAME,
    handler::{AuthState, health_check, login, register},
};

/// ルーターを構築する
///
/// ボディは [`MAX_REQUEST_BODY_BYTES`] まで受け付け、超過時は 413 を返す。
///
/// 未定義のパスは 404、定義済みパスへの未対応メソッドは 405（axum の既定動作）。
pub fn build_app(state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .with_state(state)
        // 下に書いたものが外側
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer::new(SERVICE_NAME))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
