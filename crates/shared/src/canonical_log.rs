//! # Canonical Log Line ミドルウェア
//!
//! リクエストごとに 1 行だけ、サマリ（サービス名、Request ID、メソッド、パス、
//! ステータス、レイテンシ）を出力する tower Layer。
//!
//! `SetRequestIdLayer` より内側に置くため、`x-request-id` は常に読み取れる。
//! `/health` は監視から高頻度で叩かれるため出力しない。

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use http::{Request, Response, StatusCode};
use tower::{Layer, Service};

use crate::observability::REQUEST_ID_HEADER;

fn is_health_check_path(path: &str) -> bool {
    path == "/health" || path.starts_with("/health/")
}

/// Canonical Log Line を出力する Layer
///
/// 応答できた場合は INFO、内側の Service がエラーを返した場合は ERROR で出力する。
/// いずれも `log.type = "canonical"` を付与する。
#[derive(Clone, Copy, Debug)]
pub struct CanonicalLogLineLayer {
    service: &'static str,
}

impl CanonicalLogLineLayer {
    pub fn new(service: &'static str) -> Self {
        Self { service }
    }
}

impl<S> Layer<S> for CanonicalLogLineLayer {
    type Service = CanonicalLogLineService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CanonicalLogLineService {
            inner,
            service: self.service,
        }
    }
}

/// [`CanonicalLogLineLayer`] が生成する Service
#[derive(Clone, Debug)]
pub struct CanonicalLogLineService<S> {
    inner:   S,
    service: &'static str,
}

/// 1 リクエスト分のサマリ
///
/// リクエスト受信時に作り、完了時に `completed` / `failed` のどちらかで 1 回だけ出力する。
struct RequestSummary {
    service:    &'static str,
    request_id: String,
    method:     String,
    path:       String,
    started_at: Instant,
}

impl RequestSummary {
    fn begin<B>(service: &'static str, req: &Request<B>) -> Self {
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("-")
            .to_owned();

        Self {
            service,
            request_id,
            method: req.method().to_string(),
            path: req.uri().path().to_owned(),
            started_at: Instant::now(),
        }
    }

    fn latency_ms(&self) -> u64 {
        u64::try_from(self.started_at.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn completed(self, status: StatusCode) {
        tracing::info!(
            log.r#type = "canonical",
            service = self.service,
            http.request_id = %self.request_id,
            http.method = %self.method,
            http.path = %self.path,
            http.status_code = status.as_u16(),
            http.latency_ms = self.latency_ms(),
            "リクエスト完了"
        );
    }

    fn failed(self, error: &dyn std::fmt::Display) {
        tracing::error!(
            log.r#type = "canonical",
            service = self.service,
            http.request_id = %self.request_id,
            http.method = %self.method,
            http.path = %self.path,
            http.latency_ms = self.latency_ms(),
            error.message = %error,
            "リクエスト処理エラー"
        );
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CanonicalLogLineService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: std::fmt::Display + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // poll_ready 済みの inner を取り出し、代わりに clone を残す
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let summary = (!is_health_check_path(req.uri().path()))
            .then(|| RequestSummary::begin(self.service, &req));

        Box::pin(async move {
            let result = inner.call(req).await;

            if let Some(summary) = summary {
                match &result {
                    Ok(response) => summary.completed(response.status()),
                    Err(err) => summary.failed(err),
                }
            }

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        convert::Infallible,
        io,
        sync::{Arc, Mutex},
    };

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tower::ServiceExt;

    use super::*;

    /// JSON ログを溜めるバッファ
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    impl LogBuffer {
        /// 出力済みの行を JSON として返す
        fn lines(&self) -> Vec<serde_json::Value> {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(|line| serde_json::from_str(line).unwrap())
                .collect()
        }
    }

    /// JSON 出力の subscriber をスレッドローカルに設定する
    ///
    /// 戻り値の guard はテスト終了まで保持すること。
    fn capture_json_logs() -> (tracing::subscriber::DefaultGuard, LogBuffer) {
        let buffer = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .flatten_event(true)
            .with_writer(buffer.clone())
            .finish();
        (tracing::subscriber::set_default(subscriber), buffer)
    }

    fn respond_with(
        status: StatusCode,
    ) -> impl Service<Request<()>, Response = Response<()>, Error = Infallible, Future: Send>
    + Clone
    + Send
    + 'static {
        tower::service_fn(move |_req: Request<()>| async move {
            let mut response = Response::new(());
            *response.status_mut() = status;
            Ok::<_, Infallible>(response)
        })
    }

    fn request(method: http::Method, path: &str, request_id: Option<&str>) -> Request<()> {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(id) = request_id {
            builder = builder.header(REQUEST_ID_HEADER, id);
        }
        builder.body(()).unwrap()
    }

    #[rstest]
    #[case("/health", true)]
    #[case("/health/ready", true)]
    #[case("/healthz", false)]
    #[case("/users/health", false)]
    #[case("/payments/123", false)]
    fn test_is_health_check_path(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(is_health_check_path(path), expected);
    }

    #[tokio::test]
    async fn test_応答時にinfoレベルのサマリが1行出力される() {
        // Given
        let (_guard, logs) = capture_json_logs();
        let sut =
            CanonicalLogLineLayer::new("payment-service").layer(respond_with(StatusCode::CREATED));

        // When
        let response = sut
            .oneshot(request(http::Method::POST, "/payments", Some("req-1")))
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::CREATED);
        let lines = logs.lines();
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert_eq!(line["level"], "INFO");
        assert_eq!(line["message"], "リクエスト完了");
        assert_eq!(line["log.type"], "canonical");
        assert_eq!(line["service"], "payment-service");
        assert_eq!(line["http.request_id"], "req-1");
        assert_eq!(line["http.method"], "POST");
        assert_eq!(line["http.path"], "/payments");
        assert_eq!(line["http.status_code"], 201);
        assert!(line["http.latency_ms"].is_u64());
    }

    #[tokio::test]
    async fn test_request_idが無い場合はハイフンを出力する() {
        let (_guard, logs) = capture_json_logs();
        let sut = CanonicalLogLineLayer::new("user-service").layer(respond_with(StatusCode::OK));

        sut.oneshot(request(http::Method::GET, "/users/123", None))
            .await
            .unwrap();

        assert_eq!(logs.lines()[0]["http.request_id"], "-");
    }

    #[tokio::test]
    async fn test_healthパスではサマリを出力しない() {
        let (_guard, logs) = capture_json_logs();
        let sut = CanonicalLogLineLayer::new("auth-service").layer(respond_with(StatusCode::OK));

        sut.oneshot(request(http::Method::GET, "/health", None))
            .await
            .unwrap();

        assert!(logs.lines().is_empty());
    }

    #[tokio::test]
    async fn test_serviceエラー時にerrorレベルで出力される() {
        let (_guard, logs) = capture_json_logs();
        let failing = tower::service_fn(|_req: Request<()>| async {
            Err::<Response<()>, _>("upstream closed".to_string())
        });
        let sut = CanonicalLogLineLayer::new("payment-service").layer(failing);

        let result = sut
            .oneshot(request(http::Method::GET, "/payments/pay123", None))
            .await;

        assert!(result.is_err());
        let lines = logs.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["level"], "ERROR");
        assert_eq!(lines[0]["message"], "リクエスト処理エラー");
        assert_eq!(lines[0]["error.message"], "upstream closed");
    }

    #[tokio::test]
    async fn test_405などのステータスはそのまま返される() {
        let (_guard, logs) = capture_json_logs();
        let sut = CanonicalLogLineLayer::new("user-service")
            .layer(respond_with(StatusCode::METHOD_NOT_ALLOWED));

        let response = sut
            .oneshot(request(http::Method::DELETE, "/users/123", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(logs.lines()[0]["http.status_code"], 405);
    }
}
