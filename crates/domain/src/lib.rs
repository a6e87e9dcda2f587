//! # Triad ドメイン層
//!
//! 3 サービス（Auth / Payment / User）が扱うエンティティと値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - 永続化されるエンティティは存在しない（リクエスト毎に生成される）
//! - パスから受け取った識別子は Newtype で包み、空文字列のみを拒否する
//! - リクエストボディは未解析のバイト列としてのみ保持する
//!
//! ## モジュール構成
//!
//! - [`auth`]: 認証情報・トークン
//! - [`clock`]: 時刻プロバイダ
//! - [`error`]: ドメインエラー
//! - [`payment`]: 決済レコード
//! - [`user`]: ユーザーレコード

#[macro_use]
mod macros;

pub mod auth;
pub mod clock;
pub mod error;
pub mod payment;
pub mod user;

pub use error::DomainError;
