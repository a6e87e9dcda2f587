//! # 外部コラボレーターのインターフェース
//!
//! 各サービスのハンドラが依存するストア・台帳のトレイトと、その暫定実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: ハンドラは `Arc<dyn Trait>` として受け取り、起動時に差し替える
//! - **スタブ実装**: 永続化・決済連携が入るまでは固定値を返す `Stub*` を使用する
//! - **テスタビリティ**: トレイト経由で失敗系のモックを差し込める

pub mod credential_store;
pub mod payment_ledger;
pub mod user_store;

pub use credential_store::{
    CredentialStore,
    PLACEHOLDER_TOKEN,
    PLACEHOLDER_USER_ID,
    StubCredentialStore,
    StubTokenIssuer,
    TokenIssuer,
};
pub use payment_ledger::{
    PLACEHOLDER_AMOUNT,
    PLACEHOLDER_PAYMENT_ID,
    PaymentLedger,
    StubPaymentLedger,
};
pub use user_store::{PLACEHOLDER_EMAIL, PLACEHOLDER_NAME, StubUserStore, UserStore};
