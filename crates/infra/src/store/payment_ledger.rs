//! # PaymentLedger
//!
//! 決済の実行と決済レコードの取得を担当する。
//!
//! [`StubPaymentLedger`] は決済ゲートウェイと連携せず、常に完了済みの
//! 固定レコードを返す。`created_at` は注入された [`Clock`] から取得する。

use std::sync::Arc;

use async_trait::async_trait;
use triad_domain::{
    clock::{Clock, FixedClock},
    payment::{PaymentId, PaymentRecord, PaymentRequest, PaymentStatus},
};

use crate::error::InfraError;

/// スタブが採番する決済 ID
pub const PLACEHOLDER_PAYMENT_ID: &str = "pay123";

/// スタブが返す金額（最小通貨単位）
pub const PLACEHOLDER_AMOUNT: i64 = 5000;

/// 決済台帳トレイト
#[async_trait]
pub trait PaymentLedger: Send + Sync {
    /// 決済を実行し、作成された決済レコードを返す
    ///
    /// ゲートウェイに拒否された場合は `InfraErrorKind::Declined` を返す。
    async fn charge(&self, request: &PaymentRequest) -> Result<PaymentRecord, InfraError>;

    /// ID で決済レコードを取得する
    ///
    /// 見つからない場合は `Ok(None)` を返す。
    async fn get(&self, id: &PaymentId) -> Result<Option<PaymentRecord>, InfraError>;
}

/// 固定値の決済レコードを返す決済台帳
pub struct StubPaymentLedger {
    clock: Arc<dyn Clock>,
}

impl StubPaymentLedger {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    fn completed(&self, id: PaymentId) -> PaymentRecord {
        PaymentRecord::new(
            id,
            PaymentStatus::Completed,
            PLACEHOLDER_AMOUNT,
            self.clock.now(),
        )
    }
}

impl Default for StubPaymentLedger {
    /// `created_at` を 2023-06-01T12:00:00Z に固定した台帳を作成する
    fn default() -> Self {
        Self::new(Arc::new(FixedClock::placeholder()))
    }
}

#[async_trait]
impl PaymentLedger for StubPaymentLedger {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn charge(&self, request: &PaymentRequest) -> Result<PaymentRecord, InfraError> {
        tracing::debug!(
            body_len = request.raw().len(),
            "Stub: 決済ゲートウェイ呼び出しをスキップ"
        );
        let id = PaymentId::new(PLACEHOLDER_PAYMENT_ID)
            .map_err(|e| InfraError::unexpected(e.to_string()))?;
        Ok(self.completed(id))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn get(&self, id: &PaymentId) -> Result<Option<PaymentRecord>, InfraError> {
        Ok(Some(self.completed(id.clone())))
    }
}
