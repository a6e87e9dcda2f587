//! # リクエスト入力の共通ルール
//!
//! - パスの識別子はパーセントデコードを 1 回だけ行い、そのまま返す。
//!   UTF-8 として不正なバイト列は U+FFFD に置き換え、拒否しない。
//! - リクエストボディは解析しないが、受け付けるサイズには上限を設ける。

/// 受け付けるリクエストボディの上限（バイト）
///
/// 各サービスの `build_app` で `DefaultBodyLimit::max` に渡す。
/// 超過したリクエストは 413（RFC 9457 形式）で拒否する。
pub const MAX_REQUEST_BODY_BYTES: usize = 16 * 1024 * 1024;

/// パス末尾のセグメントをパーセントデコードして返す
///
/// `/payments/{id}` のように識別子が末尾の 1 セグメントであるルートで使う。
/// `%2F` はデコード後に `/` となるが、区切りとしては扱わない。
pub fn trailing_path_param(path: &str) -> String {
    let raw = path.rsplit('/').next().unwrap_or_default();
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::そのまま("/payments/pay123", "pay123")]
    #[case::空白("/users/a%20b", "a b")]
    #[case::エンコードされたスラッシュ("/payments/a%2Fb", "a/b")]
    #[case::日本語("/users/%E3%83%A6%E3%83%BC%E3%82%B6%E3%83%BC", "ユーザー")]
    #[case::プラスは空白にしない("/users/a+b", "a+b")]
    #[case::二重エンコードは1回だけデコード("/users/%2541", "%41")]
    #[case::不正なutf8は置換文字("/payments/%FF", "\u{FFFD}")]
    #[case::途中で切れたutf8("/payments/%C3", "\u{FFFD}")]
    #[case::不完全なエスケープはそのまま("/users/100%", "100%")]
    fn test_trailing_path_param(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(trailing_path_param(path), expected);
    }

    #[test]
    fn test_trailing_path_param_末尾が空なら空文字列() {
        assert_eq!(trailing_path_param("/users/"), "");
    }
}
