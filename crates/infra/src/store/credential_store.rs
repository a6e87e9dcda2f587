//! # CredentialStore / TokenIssuer
//!
//! ログイン時の認証情報検証、登録時の認証情報作成、トークン発行を担当する。
//!
//! 実際の検証ロジックは未実装のため、[`StubCredentialStore`] は
//! リクエストボディの内容に関わらず固定のユーザー ID を返す。

use async_trait::async_trait;
use triad_domain::{
    auth::{AccessToken, AuthToken, Credentials},
    user::UserId,
};

use crate::error::InfraError;

/// スタブが返すユーザー ID
pub const PLACEHOLDER_USER_ID: &str = "user123";

/// スタブが発行するトークン
pub const PLACEHOLDER_TOKEN: &str = "sample-token";

/// 認証情報ストアトレイト
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// 認証情報を検証する
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(user_id))`: 認証成功
    /// - `Ok(None)`: 認証失敗
    /// - `Err(_)`: ストアのエラー
    async fn verify(&self, credentials: &Credentials) -> Result<Option<UserId>, InfraError>;

    /// 認証情報を作成し、新しいユーザー ID を返す
    ///
    /// 登録済みの場合は `InfraErrorKind::Conflict` を返す。
    async fn create(&self, credentials: &Credentials) -> Result<UserId, InfraError>;
}

/// トークン発行トレイト
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// 認証済みユーザーに対してトークンを発行する
    async fn issue(&self, user_id: &UserId) -> Result<AuthToken, InfraError>;
}

/// 固定のユーザー ID を返す認証情報ストア
#[derive(Debug, Clone, Default)]
pub struct StubCredentialStore;

fn placeholder_user_id() -> Result<UserId, InfraError> {
    UserId::new(PLACEHOLDER_USER_ID).map_err(|e| InfraError::unexpected(e.to_string()))
}

#[async_trait]
impl CredentialStore for StubCredentialStore {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn verify(&self, credentials: &Credentials) -> Result<Option<UserId>, InfraError> {
        tracing::debug!(
            body_len = credentials.raw().len(),
            "Stub: 認証情報の検証をスキップ"
        );
        placeholder_user_id().map(Some)
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn create(&self, credentials: &Credentials) -> Result<UserId, InfraError> {
        tracing::debug!(
            body_len = credentials.raw().len(),
            "Stub: 認証情報の保存をスキップ"
        );
        placeholder_user_id()
    }
}

/// 固定のトークンを発行するトークン発行器
#[derive(Debug, Clone, Default)]
pub struct StubTokenIssuer;

#[async_trait]
impl TokenIssuer for StubTokenIssuer {
    #[tracing::instrument(skip_all, level = "debug", fields(%user_id))]
    async fn issue(&self, user_id: &UserId) -> Result<AuthToken, InfraError> {
        let token =
            AccessToken::new(PLACEHOLDER_TOKEN).map_err(|e| InfraError::unexpected(e.to_string()))?;
        Ok(AuthToken::new(token, user_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_verify_はボディに関わらず固定ユーザーを返す() {
        let sut = StubCredentialStore;

        for body in ["", "{}", "not json", r#"{"email":"a@example.com"}"#] {
            let user_id = sut.verify(&Credentials::from_raw(body)).await.unwrap();
            assert_eq!(user_id.unwrap().as_str(), PLACEHOLDER_USER_ID);
        }
    }

    #[tokio::test]
    async fn test_create_は固定ユーザーidを返す() {
        let sut = StubCredentialStore;

        let user_id = sut.create(&Credentials::default()).await.unwrap();

        assert_eq!(user_id.as_str(), PLACEHOLDER_USER_ID);
    }

    #[tokio::test]
    async fn test_issue_は対象ユーザーに固定トークンを発行する() {
        let sut = StubTokenIssuer;
        let user_id = UserId::new("someone").unwrap();

        let token = sut.issue(&user_id).await.unwrap();

        assert_eq!(token.token().as_str(), PLACEHOLDER_TOKEN);
        assert_eq!(token.user_id(), &user_id);
    }
}
