use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use super::AppState;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "BizSpec Translator API",
        "version": VERSION,
        "health": "/health",
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": VERSION }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::test_helpers::{misconfigured_router, test_router_with_reply};

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_reports_status_and_version() {
        let (status, v) = get_json(test_router_with_reply("x"), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["status"], "ok");
        assert_eq!(v["version"], "1.0.0");
    }

    #[tokio::test]
    async fn health_ok_without_api_key() {
        let (status, v) = get_json(misconfigured_router(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["status"], "ok");
    }

    #[tokio::test]
    async fn root_points_at_health() {
        let (status, v) = get_json(test_router_with_reply("x"), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["health"], "/health");
        assert_eq!(v["version"], "1.0.0");
    }
}
