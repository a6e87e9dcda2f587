/// 文字列ベースの識別子型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`String` をラップ）
/// - `derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Display)`
/// - `new()`: 空文字列を拒否して生成（それ以外の正規化は行わない）
/// - `as_str()` / `into_string()`: 内部文字列へのアクセス
///
/// パスパラメータをそのままエコーバックするため、trim や大文字小文字の
/// 変換は行わない。
///
/// # 使用例
///
/// ```rust
/// use triad_domain::user::UserId;
///
/// let id = UserId::new(" user 42 ").unwrap();
/// assert_eq!(id.as_str(), " user 42 ");
/// assert!(UserId::new("").is_err());
/// ```
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident, $label:expr;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash,
            serde::Serialize,
            derive_more::Display,
        )]
        #[display("{_0}")]
        $vis struct $Name(String);

        impl $Name {
            /// 文字列から識別子を作成する
            ///
            /// 空文字列の場合は [`DomainError::Validation`](crate::DomainError::Validation) を返す。
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                let value = value.into();
                if value.is_empty() {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は必須です",
                        $label
                    )));
                }
                Ok(Self(value))
            }

            /// 内部の文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// 内部の文字列を取り出す
            pub fn into_string(self) -> String {
                self.0
            }
        }
    };
}

/// 未解析のリクエストボディを保持する型を定義する宣言型マクロ
///
/// 現時点ではボディを解析しないため、受け取ったバイト列をそのまま保持する。
/// 実装が外部コラボレーター（ストア、決済ゲートウェイ）に置き換わった時点で
/// 型付きのフィールドに置き換える。
macro_rules! define_raw_payload {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        $vis struct $Name {
            raw: bytes::Bytes,
        }

        impl $Name {
            /// 受信したボディから作成する
            pub fn from_raw(raw: impl Into<bytes::Bytes>) -> Self {
                Self { raw: raw.into() }
            }

            /// 未解析のボディを取得する
            pub fn raw(&self) -> &[u8] {
                &self.raw
            }

            /// ボディが空かどうか
            pub fn is_empty(&self) -> bool {
                self.raw.is_empty()
            }
        }
    };
}
