//! # UserStore
//!
//! ユーザーレコードの取得・更新を担当する。
//!
//! [`StubUserStore`] は要求された ID をそのまま使い、名前とメールアドレスは
//! 固定値のレコードを返す。更新内容は保存しない。

use async_trait::async_trait;
use triad_domain::user::{UserId, UserRecord, UserUpdate};

use crate::error::InfraError;

/// スタブが返すユーザー名
pub const PLACEHOLDER_NAME: &str = "サンプルユーザー";

/// スタブが返すメールアドレス
pub const PLACEHOLDER_EMAIL: &str = "user@example.com";

/// ユーザーストアトレイト
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID でユーザーを取得する
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(record))`: ユーザーが見つかった場合
    /// - `Ok(None)`: ユーザーが見つからない場合
    /// - `Err(_)`: ストアのエラー
    async fn get(&self, id: &UserId) -> Result<Option<UserRecord>, InfraError>;

    /// ユーザーを更新し、更新後のレコードを返す
    ///
    /// ユーザーが存在しない場合は `Ok(None)` を返す。
    async fn update(
        &self,
        id: &UserId,
        update: &UserUpdate,
    ) -> Result<Option<UserRecord>, InfraError>;
}

/// 固定値のレコードを返すユーザーストア
#[derive(Debug, Clone, Default)]
pub struct StubUserStore;

impl StubUserStore {
    fn placeholder(id: &UserId) -> UserRecord {
        UserRecord::new(id.clone(), PLACEHOLDER_NAME, PLACEHOLDER_EMAIL)
    }
}

#[async_trait]
impl UserStore for StubUserStore {
    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn get(&self, id: &UserId) -> Result<Option<UserRecord>, InfraError> {
        Ok(Some(Self::placeholder(id)))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(
        &self,
        id: &UserId,
        update: &UserUpdate,
    ) -> Result<Option<UserRecord>, InfraError> {
        tracing::debug!(
            body_len = update.raw().len(),
            "Stub: ユーザー情報の保存をスキップ"
        );
        Ok(Some(Self::placeholder(id)))
    }
}
