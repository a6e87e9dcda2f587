//! # 決済ドメイン
//!
//! | 型 | 説明 |
//! |---|------|
//! | [`PaymentId`] | 決済識別子 |
//! | [`PaymentStatus`] | 決済状態 |
//! | [`PaymentRecord`] | 決済レコード |
//! | [`PaymentRequest`] | 未解析の決済リクエスト（リクエストボディ） |

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

define_string_id! {
    /// 決済 ID
    pub struct PaymentId, "決済 ID";
}

define_raw_payload! {
    /// 決済リクエスト
    ///
    /// `POST /payments` のリクエストボディ。
    pub struct PaymentRequest;
}

/// 決済状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentStatus {
    /// 処理中
    Pending,
    /// 完了
    Completed,
    /// 失敗
    Failed,
}

/// 決済レコード
///
/// `amount` は最小通貨単位の整数で保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRecord {
    id:         PaymentId,
    status:     PaymentStatus,
    amount:     i64,
    created_at: DateTime<Utc>,
}

impl PaymentRecord {
    pub fn new(
        id: PaymentId,
        status: PaymentStatus,
        amount: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            status,
            amount,
            created_at,
        }
    }

    pub fn id(&self) -> &PaymentId {
        &self.id
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// `created_at` を RFC 3339（秒精度、`Z` 表記）で返す
    pub fn created_at_rfc3339(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
