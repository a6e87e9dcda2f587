//! # ドメイン層エラー定義
//!
//! 値オブジェクトの生成時に検出されるルール違反を表現する。
//!
//! API 層でこのエラーを受け取り、400 Bad Request に変換する。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 識別子が空文字列の場合などに使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
