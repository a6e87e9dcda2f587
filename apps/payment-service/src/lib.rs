//! # Payment Service ライブラリ
//!
//! 決済の作成と決済レコードの取得を担当する。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーター構築
//! - `error`: エラー定義と HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ

pub mod app_builder;
pub mod error;
pub mod handler;

/// サービス名（ヘルスチェックとログに使用）
pub const SERVICE_NAME: &str = "payment-service";
