//! # Payment Service エラー定義
//!
//! Payment Service 固有のエラーと、HTTP レスポンス（RFC 9457 Problem Details）への
//! 変換を定義する。

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

/// Payment Service で発生するエラー
#[derive(Debug, Error)]
pub enum PaymentError {
    /// 決済が見つからない
    #[error("決済が見つかりません: {0}")]
    NotFound(String),

    /// 入力値の検証失敗
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// リクエストボディの受信失敗（サイズ超過など）
    #[error(transparent)]
    Body(#[from] BytesRejection),

    /// 決済台帳のエラー
    #[error("インフラエラー: {0}")]
    Infra(#[from] InfraError),
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            PaymentError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::not_found(format!("決済が見つかりません: {id}")),
            ),
            PaymentError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error(e.to_string()),
            ),
            PaymentError::Body(rejection) => body_rejection(rejection),
            PaymentError::Infra(e) => match e.kind() {
                InfraErrorKind::Declined(reason) => (
                    StatusCode::PAYMENT_REQUIRED,
                    ErrorResponse::payment_declined(reason.clone()),
                ),
                InfraErrorKind::InvalidInput(msg) => (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::validation_error(msg.clone()),
                ),
                InfraErrorKind::Unavailable(msg) => {
                    tracing::warn!("決済基盤が利用できません: {}", msg);
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        ErrorResponse::service_unavailable("決済基盤が利用できません"),
                    )
                }
                InfraErrorKind::Conflict { .. } | InfraErrorKind::Unexpected(_) => {
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
