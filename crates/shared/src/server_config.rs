//! # サーバー設定
//!
//! 各サービスのバインドアドレスとポートを環境変数から読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `{PREFIX}_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `{PREFIX}_PORT` | No | ポート番号（デフォルト: `8080`） |
//!
//! `PREFIX` はサービスごとに `AUTH` / `PAYMENT` / `USER` を使う。
//! 3 サービスは別プロセス（別コンテナ）として起動するため、既定ポートは共通でよい。

use std::{env, net::SocketAddr};

use thiserror::Error;

/// デフォルトのバインドアドレス
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// デフォルトのポート番号
pub const DEFAULT_PORT: u16 = 8080;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// ポート番号として解釈できない
    #[error("{key} は有効なポート番号である必要があります: {value:?}")]
    InvalidPort { key: String, value: String },

    /// バインドアドレスとして解釈できない
    #[error("バインドアドレスが不正です: {0:?}")]
    InvalidAddress(String),
}

/// サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(prefix, |key| env::var(key).ok())
    }

    /// 任意のルックアップ関数から設定を読み込む
    ///
    /// 未設定のキーはデフォルト値を使う。空文字列は設定値として扱う。
    pub fn from_lookup(
        prefix: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let host_key = format!("{prefix}_HOST");
        let port_key = format!("{prefix}_PORT");

        let host = lookup(&host_key).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup(&port_key) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
                key: port_key,
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// バインド先のソケットアドレスを返す
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(self.host.clone()))
    }
}
