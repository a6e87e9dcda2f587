//! # Payment Service アプリケーション構築

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
    handler::{PaymentState, create_payment, get_payment, health_check},
};

/// ルーターを構築する
///
/// ボディは [`MAX_REQUEST_BODY_BYTES`] まで受け付け、超過時は 413 を返す。
///
/// `GET /payments/` のように ID が空のリクエストは `{id}` にマッチせず 404 になる。
pub fn build_app(state: Arc<PaymentState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/payments", post(create_payment))
        .route("/payments/{id}", get(get_payment))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .with_state(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer::new(SERVICE_NAME))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
