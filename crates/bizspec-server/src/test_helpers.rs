use std::sync::Arc;

use axum::Router;
use bizspec_llm::MockBackend;
use bizspec_service::Translator;
use tokio::net::TcpListener;

use crate::config::DEFAULT_CORS_ORIGINS;

/// A requirement that passes length validation.
pub const VALID_REQUIREMENT: &str =
    "ECサイトで、カートに入れた商品の合計金額が1万円以上なら送料無料にしたい";

fn default_origins() -> Vec<String> {
    DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()
}

fn router_with(translator: Option<Translator>) -> Router {
    crate::build_app(translator, &default_origins()).unwrap()
}

/// Build a test router whose backend answers every prompt with `reply`.
pub fn test_router_with_reply(reply: &str) -> Router {
    let backend = Arc::new(MockBackend::success(reply));
    router_with(Some(Translator::with_backend(backend)))
}

/// Build a test router whose backend fails every call with an API error.
pub fn failing_router(status: u16, message: &str) -> Router {
    let backend = Arc::new(MockBackend::failure(status, message));
    router_with(Some(Translator::with_backend(backend)))
}

/// Build a test router as the server runs without an API key.
pub fn misconfigured_router() -> Router {
    router_with(None)
}

/// A running test server with base_url and background task handle.
pub struct TestServer {
    pub base_url: String,
    _handle: tokio::task::JoinHandle<()>,
}

/// Spawn an axum test server on a random port. Returns the TestServer
/// with the `base_url` (e.g. "http://127.0.0.1:12345").
pub async fn spawn_test_server(app: Router) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base_url,
        _handle: handle,
    }
}
