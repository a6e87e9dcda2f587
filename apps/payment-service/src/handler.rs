//! # HTTP リクエストハンドラ
//!
//! - `health`: ヘルスチェック
//! - `payment`: 決済の作成・取得

pub mod health;
pub mod payment;

pub use health::health_check;
pub use payment::{
    CreatePaymentResponse,
    PaymentResponse,
    PaymentState,
    create_payment,
    get_payment,
};
