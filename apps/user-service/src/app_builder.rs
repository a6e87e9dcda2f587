//! # User Service アプリケーション構築

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit, routing::get};
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
    handler::{UserState, get_user, health_check, update_user},
};

/// ルーターを構築する
///
/// ボディは [`MAX_REQUEST_BODY_BYTES`] まで受け付け、超過時は 413 を返す。
///
/// `/users/{id}` は GET と PUT のみ。それ以外のメソッドは 405 になる。
pub fn build_app(state: Arc<UserState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/users/{id}", get(get_user).put(update_user))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .with_state(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer::new(SERVICE_NAME))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
