//! # インフラ層エラー定義
//!
//! 外部コラボレーター（ストア、決済ゲートウェイ）との通信で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別（Conflict, Declined, Unavailable 等）
//!
//! convenience constructor でエラーを生成すると、その時点のスパン情報が
//! 自動的にキャプチャされる。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別に応じた処理には [`kind()`](InfraError::kind) を使用する:
///
/// ```ignore
/// match error.kind() {
///     InfraErrorKind::Conflict { entity, id } => { /* 競合処理 */ }
///     _ => { /* その他 */ }
/// }
/// ```
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
///
/// API 層でこのエラー種別に応じて適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// 競合（登録済みなど）
    #[error("競合が発生しました: {entity}(id={id})")]
    Conflict {
        /// エンティティ名（例: "User"）
        entity: String,
        /// エンティティの ID
        id:     String,
    },

    /// 決済ゲートウェイによる拒否
    #[error("決済が拒否されました: {0}")]
    Declined(String),

    /// 依存先が利用できない
    ///
    /// ストアへの接続失敗、タイムアウトなど。
    #[error("依存サービスが利用できません: {0}")]
    Unavailable(String),

    /// クライアント入力エラー
    ///
    /// インフラ層で検出されるが、原因はクライアント入力にある。
    #[error("入力エラー: {0}")]
    InvalidInput(String),

    /// 予期しないエラー
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    fn with_kind(kind: InfraErrorKind) -> Self {
        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }

    // ===== Convenience constructors =====

    /// 競合エラーを生成する
    pub fn conflict(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::with_kind(InfraErrorKind::Conflict {
            entity: entity.into(),
            id:     id.into(),
        })
    }

    /// 決済拒否エラーを生成する
    pub fn declined(reason: impl Into<String>) -> Self {
        Self::with_kind(InfraErrorKind::Declined(reason.into()))
    }

    /// 依存先利用不可エラーを生成する
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::with_kind(InfraErrorKind::Unavailable(msg.into()))
    }

    /// クライアント入力エラーを生成する
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::with_kind(InfraErrorKind::InvalidInput(msg.into()))
    }

    /// 予期しないエラーを生成する
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::with_kind(InfraErrorKind::Unexpected(msg.into()))
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}
