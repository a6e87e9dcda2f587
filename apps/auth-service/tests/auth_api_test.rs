//! # Auth Service API テスト
//!
//! `build_app` で組み立てた本番と同じルーター（スタブのコラボレーター付き）に対して
//! API 契約を検証する。
//!
//! - `GET /health` が 200 と `{status: "ok", service: "auth-service"}` を返す
//! - ログイン・登録がボディの内容に関わらず成功する
//! - 未定義のルートが 2xx を返さない
//! - レスポンスに `X-Request-Id` が付与される

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tower::ServiceExt;
use triad_auth_service::{app_builder::build_app, handler::AuthState};
use triad_infra::store::{StubCredentialStore, StubTokenIssuer};
use triad_shared::request::MAX_REQUEST_BODY_BYTES;

fn test_app() -> Router {
    build_app(Arc::new(AuthState::new(
        Arc::new(StubCredentialStore),
        Arc::new(StubTokenIssuer),
    )))
}

fn request(method: Method, uri: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap()
}

async fn json_body(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_healthが200とサービス名を返す() {
    let response = test_app()
        .oneshot(request(Method::GET, "/health", Body::empty()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({"status": "ok", "service": "auth-service"})
    );
}

#[rstest]
#[case::空のボディ("")]
#[case::json("{\"email\":\"user@example.com\",\"password\":\"secret\"}")]
#[case::空のjsonオブジェクト("{}")]
#[case::json以外("this is not json")]
#[tokio::test]
async fn test_loginはボディに関わらず200とトークンを返す(#[case] body: &'static str) {
    let response = test_app()
        .oneshot(request(Method::POST, "/auth/login", Body::from(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json, serde_json::json!({"token": "sample-token", "user_id": "user123"}));
}

#[tokio::test]
async fn test_loginはcontent_typeがjsonでなくても受け付ける() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/auth/login")
                .header("content-type", "text/plain")
                .body(Body::from("user=alice"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_registerが201とuser_idを返す() {
    let response = test_app()
        .oneshot(request(
            Method::POST,
            "/auth/register",
            Body::from(r#"{"email":"new@example.com"}"#),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = json_body(response).await;
    assert_eq!(
        json,
        serde_json::json!({"message": "ユーザーが登録されました", "user_id": "user123"})
    );
}

#[rstest]
#[case::未定義のパス(Method::GET, "/auth/logout")]
#[case::loginへのget(Method::GET, "/auth/login")]
#[case::registerへのdelete(Method::DELETE, "/auth/register")]
#[case::他サービスのパス(Method::GET, "/users/123")]
#[tokio::test]
async fn test_未定義のルートは2xxを返さない(#[case] method: Method, #[case] uri: &str) {
    let response = test_app()
        .oneshot(request(method, uri, Body::empty()))
        .await
        .unwrap();

    assert!(
        matches!(
            response.status(),
            StatusCode::NOT_FOUND | StatusCode::METHOD_NOT_ALLOWED
        ),
        "404 または 405 であること: {}",
        response.status()
    );
}

#[tokio::test]
async fn test_レスポンスにuuid_v7のx_request_idが付与される() {
    let response = test_app()
        .oneshot(request(Method::POST, "/auth/login", Body::empty()))
        .await
        .unwrap();

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id ヘッダーが含まれること")
        .to_str()
        .unwrap();
    let uuid = uuid::Uuid::parse_str(request_id).unwrap();
    assert_eq!(uuid.get_version(), Some(uuid::Version::SortRand));
}

#[tokio::test]
async fn test_クライアント提供のx_request_idがそのまま返される() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/health")
                .header("x-request-id", "client-request-id-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "client-request-id-123"
    );
}

#[tokio::test]
async fn test_loginは2mibを超えるボディも受け付ける() {
    let body = vec![b'a'; 3 * 1024 * 1024];

    let response = test_app()
        .oneshot(request(Method::POST, "/auth/login", Body::from(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[rstest]
#[case::login("/auth/login")]
#[case::register("/auth/register")]
#[tokio::test]
async fn test_上限を超えるボディは413とproblem_detailsを返す(#[case] uri: &str) {
    // Given
    let body = vec![b'a'; MAX_REQUEST_BODY_BYTES + 1];

    // When
    let response = test_app()
        .oneshot(request(Method::POST, uri, Body::from(body)))
        .await
        .unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let json = json_body(response).await;
    assert_eq!(
        json["type"],
        "https://triad.example.com/errors/payload-too-large"
    );
    assert_eq!(json["title"], "Payload Too Large");
}
