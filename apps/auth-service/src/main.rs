//! # Auth Service サーバー
//!
//! ログイントークンの発行とユーザー登録を担当する API サーバー。
//!
//! 認証情報の検証・保存はまだ実装しておらず、スタブ（固定値）で応答する。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | ステータス |
//! |----------|------|-----------|
//! | GET | `/health` | 200 |
//! | POST | `/auth/login` | 200 |
//! | POST | `/auth/register` | 201 |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `AUTH_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `AUTH_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p triad-auth-service
//! ```
//!
//! バインドに失敗した場合は即座に異常終了する（再起動はオーケストレーターに任せる）。

use std::sync::Arc;

use anyhow::Context as _;
use tokio::net::TcpListener;
use triad_auth_service::{SERVICE_NAME, app_builder::build_app, handler::AuthState};
use triad_infra::store::{StubCredentialStore, StubTokenIssuer};
use triad_shared::{
    ServerConfig,
    observability::{TracingConfig, init_tracing},
};

/// Auth Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env(SERVICE_NAME));
    let _tracing_guard = tracing::info_span!("app", service = SERVICE_NAME).entered();

    let config = ServerConfig::from_env("AUTH").context("設定の読み込みに失敗しました")?;
    let addr = config.socket_addr()?;

    tracing::info!("Auth Service サーバーを起動します: {}", addr);

    let state = Arc::new(AuthState::new(
        Arc::new(StubCredentialStore),
        Arc::new(StubTokenIssuer),
    ));
    let app = build_app(state);

    let listener = TcpListener::bind(addr)
        .await
        .inspect_err(|e| tracing::error!("バインドに失敗しました: {}: {}", addr, e))
        .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
    tracing::info!("Auth Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
