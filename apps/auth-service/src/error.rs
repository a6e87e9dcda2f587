//! # Auth Service エラー定義
//!
//! Auth Service 固有のエラーと、HTTP レスポンス（RFC 9457 Problem Details）への
//! 変換を定義する。

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use triad_infra::{InfraError, InfraErrorKind};
use triad_shared::{ErrorResponse, request::MAX_REQUEST_BODY_BYTES};

/// Auth Service で発生するエラー
#[derive(Debug, Error)]
pub enum AuthError {
    /// 認証失敗
    #[error("認証に失敗しました")]
    AuthenticationFailed,

    /// リクエストボディの受信失敗（サイズ超過など）
    #[error(transparent)]
    Body(#[from] BytesRejection),

    /// 認証情報ストア・トークン発行器のエラー
    #[error("インフラエラー: {0}")]
    Infra(#[from] InfraError),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AuthError::AuthenticationFailed => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::authentication_failed("認証に失敗しました"),
            ),
            AuthError::Body(rejection) => body_rejection(rejection),
            AuthError::Infra(e) => match e.kind() {
                InfraErrorKind::Conflict { .. } => (
                    StatusCode::CONFLICT,
                    ErrorResponse::conflict("ユーザーは既に登録されています"),
                ),
                InfraErrorKind::InvalidInput(msg) => (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::validation_error(msg.clone()),
                ),
                InfraErrorKind::Unavailable(msg) => {
                    tracing::warn!("認証基盤が利用できません: {}", msg);
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        ErrorResponse::service_unavailable("認証基盤が利用できません"),
                    )
                }
                InfraErrorKind::Declined(_) | InfraErrorKind::Unexpected(_) => {
                    tracing::error!(
                        error.span_trace = %e.span_trace(),
                        "内部エラー: {}",
                        e
                    );
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorResponse::internal_error(),
                    )
                }
            },
        };

        (status, Json(body)).into_response()
    }
}

/// ボディ受信失敗を RFC 9457 形式に変換する
fn body_rejection(rejection: &BytesRejection) -> (StatusCode, ErrorResponse) {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            ErrorResponse::payload_too_large(format!(
                "リクエストボディは {MAX_REQUEST_BODY_BYTES} バイト以下である必要があります"
            )),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            ErrorResponse::validation_error(rejection.body_text()),
        )
    }
}
