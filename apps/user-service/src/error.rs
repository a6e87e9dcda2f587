//! # User Service エラー定義

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use triad_domain::DomainError;
use triad_infra::{InfraError, InfraErrorKind};
use triad_shared::{ErrorResponse, request::MAX_REQUEST_BODY_BYTES};

/// User Service で発生するエラー
#[derive(Debug, Error)]
pub enum UserError {
    /// ユーザーが見つからない
    #[error("ユーザーが見つかりません: {0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] DomainError),

    /// リクエストボディの受信失敗（サイズ超過など）
    #[error(transparent)]
    Body(#[from] BytesRejection),

    /// ユーザーストアのエラー
    #[error("インフラエラー: {0}")]
    Infra(#[from] InfraError),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            UserError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::not_found(format!("ユーザーが見つかりません: {id}")),
            ),
            UserError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error(e.to_string()),
            ),
            UserError::Body(rejection) => body_rejection(rejection),
            UserError::Infra(e) => match e.kind() {
                InfraErrorKind::Conflict { entity, id } => (
                    StatusCode::CONFLICT,
                    ErrorResponse::conflict(format!("{entity} が競合しています: {id}")),
                ),
                InfraErrorKind::InvalidInput(msg) => (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::validation_error(msg.clone()),
                ),
                InfraErrorKind::Unavailable(msg) => {
                    tracing::warn!("ユーザーストアが利用できません: {}", msg);
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        ErrorResponse::service_unavailable("ユーザーストアが利用できません"),
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
