//! # Payment Service サーバー
//!
//! 決済の作成と取得を担当する API サーバー。
//!
//! 決済ゲートウェイとの連携はまだ実装しておらず、スタブ（固定値）で応答する。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | ステータス |
//! |----------|------|-----------|
//! | GET | `/health` | 200 |
//! | POST | `/payments` | 201 |
//! | GET | `/payments/{id}` | 200 |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `PAYMENT_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PAYMENT_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p triad-payment-service
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use tokio::net::TcpListener;
use triad_infra::store::StubPaymentLedger;
use triad_payment_service::{SERVICE_NAME, app_builder::build_app, handler::PaymentState};
use triad_shared::{
    ServerConfig,
    observability::{TracingConfig, init_tracing},
};

/// Payment Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env(SERVICE_NAME));
    let _tracing_guard = tracing::info_span!("app", service = SERVICE_NAME).entered();

    let config = ServerConfig::from_env("PAYMENT").context("設定の読み込みに失敗しました")?;
    let addr = config.socket_addr()?;

    tracing::info!("Payment Service サーバーを起動します: {}", addr);

    let state = Arc::new(PaymentState::new(Arc::new(StubPaymentLedger::default())));
    let app = build_app(state);

    let listener = TcpListener::bind(addr)
        .await
        .inspect_err(|e| tracing::error!("バインドに失敗しました: {}: {}", addr, e))
        .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
    tracing::info!("Payment Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
