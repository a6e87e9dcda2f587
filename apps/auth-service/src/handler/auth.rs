//! # 認証ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /auth/login` - ログイン（トークン発行）
//! - `POST /auth/register` - ユーザー登録
//!
//! リクエストボディは解析せず、未解析のまま [`CredentialStore`] に渡す。
//! そのため空のボディや JSON 以外のボディでも受け付ける。

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use triad_domain::auth::{AuthToken, Credentials};
use triad_infra::store::{CredentialStore, TokenIssuer};

use crate::error::AuthError;

/// 登録完了時のメッセージ
pub const REGISTERED_MESSAGE: &str = "ユーザーが登録されました";

/// 認証ハンドラの共有状態
pub struct AuthState {
    pub credential_store: Arc<dyn CredentialStore>,
    pub token_issuer:     Arc<dyn TokenIssuer>,
}

impl AuthState {
    pub fn new(
        credential_store: Arc<dyn CredentialStore>,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            credential_store,
            token_issuer,
        }
    }
}

// --- レスポンス型 ---

/// ログインレスポンス
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token:   String,
    pub user_id: String,
}

impl From<AuthToken> for LoginResponse {
    fn from(token: AuthToken) -> Self {
        Self {
            token:   token.token().to_string(),
            user_id: token.user_id().to_string(),
        }
    }
}

/// ユーザー登録レスポンス
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: String,
}

// --- ハンドラ ---

/// POST /auth/login
///
/// 認証情報を検証し、トークンを発行する。
pub async fn login(
    State(state): State<Arc<AuthState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AuthError> {
    let credentials = Credentials::from_raw(body?);

    let user_id = state
        .credential_store
        .verify(&credentials)
        .await?
        .ok_or(AuthError::AuthenticationFailed)?;
    let token = state.token_issuer.issue(&user_id).await?;

    Ok(Json(LoginResponse::from(token)))
}

/// POST /auth/register
///
/// 認証情報を登録し、採番されたユーザー ID を返す。
pub async fn register(
    State(state): State<Arc<AuthState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AuthError> {
    let credentials = Credentials::from_raw(body?);

    let user_id = state.credential_store.create(&credentials).await?;
    tracing::info!(%user_id, "ユーザーを登録しました");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: REGISTERED_MESSAGE.to_string(),
            user_id: user_id.into_string(),
        }),
    ))
}
