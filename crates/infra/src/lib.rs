//! # Triad インフラ層
//!
//! 外部コラボレーター（認証情報ストア、ユーザーストア、決済台帳）の
//! インターフェースと、その暫定実装を提供する。
//!
//! ## 設計方針
//!
//! - **トレイトによる抽象化**: ハンドラはトレイトオブジェクトとして注入を受ける
//! - **スタブ実装**: 永続化・決済連携は未実装のため、固定値を返すスタブを提供する
//! - **エラーの分離**: 外部要因の失敗は [`InfraError`] で表現する

pub mod error;
pub mod store;

pub use error::{InfraError, InfraErrorKind};
