//! # Triad 共有ユーティリティ
//!
//! 3 サービス（Auth / Payment / User）で共通して使用するユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換は各サービスの責務）
//! - ログ・トレーシング関連は `observability` feature で有効化する

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod error_response;
pub mod health;
pub mod observability;
pub mod request;
pub mod server_config;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
pub use server_config::{ConfigError, ServerConfig};
