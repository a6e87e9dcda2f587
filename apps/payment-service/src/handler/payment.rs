//! # 決済ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /payments` - 決済を作成する
//! - `GET /payments/{id}` - 決済レコードを取得する
//!
//! 作成時のレスポンスには `created_at` を含めない。取得時のみ含める。
//! この差はレスポンス型（[`CreatePaymentResponse`] / [`PaymentResponse`]）で表現する。

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use serde::Serialize;
use triad_domain::payment::{PaymentId, PaymentRecord, PaymentRequest, PaymentStatus};
use triad_infra::store::PaymentLedger;
use triad_shared::request::trailing_path_param;

use crate::error::PaymentError;

/// 決済ハンドラの共有状態
pub struct PaymentState {
    pub ledger: Arc<dyn PaymentLedger>,
}

impl PaymentState {
    pub fn new(ledger: Arc<dyn PaymentLedger>) -> Self {
        Self { ledger }
    }
}

// --- レスポンス型 ---

/// 決済作成レスポンス
#[derive(Debug, Serialize)]
pub struct CreatePaymentResponse {
    pub payment_id: String,
    pub status:     PaymentStatus,
    pub amount:     i64,
}

impl From<&PaymentRecord> for CreatePaymentResponse {
    fn from(record: &PaymentRecord) -> Self {
        Self {
            payment_id: record.id().to_string(),
            status:     record.status(),
            amount:     record.amount(),
        }
    }
}

/// 決済取得レスポンス
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub payment_id: String,
    pub status:     PaymentStatus,
    pub amount:     i64,
    pub created_at: String,
}

impl From<&PaymentRecord> for PaymentResponse {
    fn from(record: &PaymentRecord) -> Self {
        Self {
            payment_id: record.id().to_string(),
            status:     record.status(),
            amount:     record.amount(),
            created_at: record.created_at_rfc3339(),
        }
    }
}

// --- ハンドラ ---

/// POST /payments
///
/// リクエストボディは解析せずに決済台帳へ渡す。
pub async fn create_payment(
    State(state): State<Arc<PaymentState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, PaymentError> {
    let request = PaymentRequest::from_raw(body?);

    let record = state.ledger.charge(&request).await?;
    tracing::info!(
        payment_id = %record.id(),
        status = %record.status(),
        amount = record.amount(),
        "決済を作成しました"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatePaymentResponse::from(&record)),
    ))
}

/// GET /payments/{id}
///
/// パスの `id` はパーセントデコードのみ行い、そのまま台帳に渡す。
/// UTF-8 として不正な `id` も拒否しない（[`trailing_path_param`] を参照）。
pub async fn get_payment(
    State(state): State<Arc<PaymentState>>,
    uri: Uri,
) -> Result<impl IntoResponse, PaymentError> {
    let payment_id = PaymentId::new(trailing_path_param(uri.path()))?;

    let record = state
        .ledger
        .get(&payment_id)
        .await?
        .ok_or_else(|| PaymentError::NotFound(payment_id.to_string()))?;

    Ok(Json(PaymentResponse::from(&record)))
}
