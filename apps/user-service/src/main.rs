//! # User Service サーバー
//!
//! ユーザー情報の取得と更新を担当する API サーバー。
//! 永続化はまだなく、スタブの [`StubUserStore`] で応答する。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | ステータス |
//! |----------|------|-----------|
//! | GET | `/health` | 200 |
//! | GET | `/users/{id}` | 200 |
//! | PUT | `/users/{id}` | 200 |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `USER_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `USER_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |

use std::sync::Arc;

use anyhow::Context as _;
use tokio::net::TcpListener;
use triad_infra::store::StubUserStore;
use triad_shared::{
    ServerConfig,
    observability::{TracingConfig, init_tracing},
};
use triad_user_service::{SERVICE_NAME, app_builder::build_app, handler::UserState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env(SERVICE_NAME));
    let _tracing_guard = tracing::info_span!("app", service = SERVICE_NAME).entered();

    let config = ServerConfig::from_env("USER").context("設定の読み込みに失敗しました")?;
    let addr = config.socket_addr()?;

    tracing::info!("User Service サーバーを起動します: {}", addr);

    let state = Arc::new(UserState::new(Arc::new(StubUserStore)));
    let app = build_app(state);

    let listener = TcpListener::bind(addr)
        .await
        .inspect_err(|e| tracing::error!("バインドに失敗しました: {}: {}", addr, e))
        .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
    tracing::info!("User Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
