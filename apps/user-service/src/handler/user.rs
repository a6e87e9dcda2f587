//! # ユーザーハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /users/{id}` - ユーザー情報を取得する
//! - `PUT /users/{id}` - ユーザー情報を更新する
//!
//! パスの `id` はパーセントデコード以外の加工をせず、そのままレスポンスに返る。
//! UTF-8 として不正なバイト列は U+FFFD に置き換える。

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::Uri,
    response::IntoResponse,
};
use serde::Serialize;
use triad_domain::user::{UserId, UserRecord, UserUpdate};
use triad_infra::store::UserStore;
use triad_shared::request::trailing_path_param;

use crate::error::UserError;

/// 更新完了時のメッセージ
pub const UPDATED_MESSAGE: &str = "ユーザー情報が更新されました";

/// ユーザーハンドラの共有状態
pub struct UserState {
    pub user_store: Arc<dyn UserStore>,
}

impl UserState {
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }
}

// --- レスポンス型 ---

/// ユーザー取得レスポンス
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id:    String,
    pub name:  String,
    pub email: String,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            id:    record.id().to_string(),
            name:  record.name().to_string(),
            email: record.email().to_string(),
        }
    }
}

/// ユーザー更新レスポンス
#[derive(Debug, Serialize)]
pub struct UpdateUserResponse {
    pub message: String,
    pub id:      String,
}

// --- ハンドラ ---

/// GET /users/{id}
pub async fn get_user(
    State(state): State<Arc<UserState>>,
    uri: Uri,
) -> Result<impl IntoResponse, UserError> {
    let user_id = UserId::new(trailing_path_param(uri.path()))?;

    let record = state
        .user_store
        .get(&user_id)
        .await?
        .ok_or_else(|| UserError::NotFound(user_id.to_string()))?;

    Ok(Json(UserResponse::from(record)))
}

/// PUT /users/{id}
///
/// リクエストボディは解析せずにストアへ渡す。
pub async fn update_user(
    State(state): State<Arc<UserState>>,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, UserError> {
    let user_id = UserId::new(trailing_path_param(uri.path()))?;
    let update = UserUpdate::from_raw(body?);

    let record = state
        .user_store
        .update(&user_id, &update)
        .await?
        .ok_or_else(|| UserError::NotFound(user_id.to_string()))?;
    tracing::info!(user_id = %record.id(), "ユーザー情報を更新しました");

    Ok(Json(UpdateUserResponse {
        message: UPDATED_MESSAGE.to_string(),
        id:      record.id().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode},
        routing::get,
    };
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;
    use triad_infra::InfraError;

    use super::*;

    /// 登録済みのユーザーだけを返すストア
    struct InMemoryUserStore {
        users: HashMap<String, UserRecord>,
    }

    impl InMemoryUserStore {
        fn with(ids: &[&str]) -> Self {
            let users = ids
                .iter()
                .map(|id| {
                    let record = UserRecord::new(
                        UserId::new(*id).unwrap(),
                        "山田太郎",
                        "taro@example.com",
                    );
                    (id.to_string(), record)
                })
                .collect();
            Self { users }
        }
    }

    #[async_trait]
    impl UserStore for InMemoryUserStore {
        async fn get(&self, id: &UserId) -> Result<Option<UserRecord>, InfraError> {
            Ok(self.users.get(id.as_str()).cloned())
        }

        async fn update(
            &self,
            id: &UserId,
            _update: &UserUpdate,
        ) -> Result<Option<UserRecord>, InfraError> {
            Ok(self.users.get(id.as_str()).cloned())
        }
    }

    struct UnavailableUserStore;

    #[async_trait]
    impl UserStore for UnavailableUserStore {
        async fn get(&self, _id: &UserId) -> Result<Option<UserRecord>, InfraError> {
            Err(InfraError::unavailable("connection refused"))
        }

        async fn update(
            &self,
            _id: &UserId,
            _update: &UserUpdate,
        ) -> Result<Option<UserRecord>, InfraError> {
            Err(InfraError::unavailable("connection refused"))
        }
    }

    fn create_test_app(store: Arc<dyn UserStore>) -> Router {
        Router::new()
            .route("/users/{id}", get(get_user).put(update_user))
            .with_state(Arc::new(UserState::new(store)))
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_get_user_ストアのレコードを返す() {
        // Given
        let sut = create_test_app(Arc::new(InMemoryUserStore::with(&["u-1"])));

        // When
        let response = sut
            .oneshot(
                Request::builder()
                    .uri("/users/u-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"id": "u-1", "name": "山田太郎", "email": "taro@example.com"})
        );
    }

    #[tokio::test]
    async fn test_get_user_存在しないユーザーは404() {
        let sut = create_test_app(Arc::new(InMemoryUserStore::with(&["u-1"])));

        let response = sut
            .oneshot(
                Request::builder()
                    .uri("/users/u-2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = json_body(response).await;
        assert_eq!(json["detail"], "ユーザーが見つかりません: u-2");
    }

    #[tokio::test]
    async fn test_update_user_存在しないユーザーは404() {
        let sut = create_test_app(Arc::new(InMemoryUserStore::with(&[])));

        let response = sut
            .oneshot(
                Request::builder()
                    .method(Method::PUT)
                    .uri("/users/ghost")
                    .body(Body::from(r#"{"name":"x"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_user_ストア障害で503() {
        let sut = create_test_app(Arc::new(UnavailableUserStore));

        let response = sut
            .oneshot(
                Request::builder()
                    .method(Method::PUT)
                    .uri("/users/u-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = json_body(response).await;
        assert_eq!(
            json["type"],
            "https://triad.example.com/errors/service-unavailable"
        );
    }
}
