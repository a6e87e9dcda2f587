//! # ヘルスチェック共通型
//!
//! 全サービス（Auth / Payment / User）の `GET /health` で使用される
//! レスポンス型を提供する。
//!
//! ヘルスチェックは依存先に一切触れず、常に 200 を返す（liveness probe 用）。

use serde::Serialize;

/// 稼働中を示す `status` の値
pub const STATUS_OK: &str = "ok";

/// ヘルスチェックレスポンス
///
/// `status` は常に `"ok"`、`service` はサービス名を示す。
///
/// ## 使用例
///
/// ```
/// use triad_shared::HealthResponse;
///
/// let response = HealthResponse::ok("auth-service");
/// assert_eq!(response.status, "ok");
/// assert_eq!(response.service, "auth-service");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// 稼働状態
    pub status:  String,
    /// サービス名
    pub service: String,
}

impl HealthResponse {
    /// 稼働中のレスポンスを作成する
    pub fn ok(service: impl Into<String>) -> Self {
        Self {
            status:  STATUS_OK.to_string(),
            service: service.into(),
        }
    }
}
