//! End-to-end tests over real HTTP.
//!
//! Each test spawns the bizspec router on 127.0.0.1:0; the full-pipeline test
//! also spawns a fake Anthropic Messages API and points a real Translator at it.

use axum::routing::post;
use axum::{Json, Router};
use bizspec_llm::LlmConfig;
use bizspec_server::config::DEFAULT_CORS_ORIGINS;
use bizspec_server::test_helpers::{
    misconfigured_router, spawn_test_server, test_router_with_reply, VALID_REQUIREMENT,
};
use bizspec_service::Translator;
use serde_json::{json, Value};

const REPLY: &str = "はい、以下の通りです。\n\n## 1. 技術仕様書\n- フロントエンド: React\n\n##2. 実装可能性評価\n★★☆☆☆\n\n## 3.工数見積もり\n合計: 40時間\n\n## 4. プロトタイプコード\n```js\nconst free = total >= 10000;\n```";

async fn post_translate(base_url: &str, requirement: &str) -> (u16, Value) {
    let resp = reqwest::Client::new()
        .post(format!("{base_url}/api/translate"))
        .json(&json!({ "business_requirement": requirement }))
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn health_via_http() {
    let server = spawn_test_server(test_router_with_reply(REPLY)).await;
    let v: Value = reqwest::get(format!("{}/health", server.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(v, json!({ "status": "ok", "version": "1.0.0" }));
}

#[tokio::test]
async fn translate_via_http_with_mixed_variants() {
    let server = spawn_test_server(test_router_with_reply(REPLY)).await;
    let (status, v) = post_translate(&server.base_url, VALID_REQUIREMENT).await;
    assert_eq!(status, 200);
    assert_eq!(v["technical_spec"], "- フロントエンド: React");
    assert_eq!(v["feasibility"], "★★☆☆☆");
    assert_eq!(v["estimation"], "合計: 40時間");
    assert_eq!(v["prototype_code"], "```js\nconst free = total >= 10000;\n```");
}

#[tokio::test]
async fn misconfigured_server_still_serves_health() {
    let server = spawn_test_server(misconfigured_router()).await;
    let resp = reqwest::get(format!("{}/health", server.base_url)).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let (status, v) = post_translate(&server.base_url, VALID_REQUIREMENT).await;
    assert_eq!(status, 500);
    assert!(v["detail"].as_str().unwrap().starts_with("configuration error"));
}

async fn spawn_fake_anthropic(reply: &'static str) -> String {
    let app = Router::new().route(
        "/v1/messages",
        post(move |Json(body): Json<Value>| async move {
            // Echo one line of the prompt so the test can see it arrived.
            let prompt = body["messages"][0]["content"].as_str().unwrap_or("").to_string();
            let seen = prompt.contains(VALID_REQUIREMENT);
            Json(json!({
                "content": [{ "type": "text", "text": format!("{reply}\n\nseen={seen}") }],
                "stop_reason": "end_turn"
            }))
        }),
    );
    spawn_test_server(app).await.base_url
}

#[tokio::test]
async fn full_pipeline_against_fake_anthropic() {
    let fake_url = spawn_fake_anthropic(REPLY).await;
    let config = LlmConfig::new(Some("sk-ant-test".into())).with_base_url(&fake_url);
    let translator = Translator::new(&config).unwrap();

    let origins: Vec<String> = DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect();
    let app = bizspec_server::build_app(Some(translator), &origins).unwrap();
    let server = spawn_test_server(app).await;

    let (status, v) = post_translate(&server.base_url, VALID_REQUIREMENT).await;
    assert_eq!(status, 200);
    assert_eq!(v["technical_spec"], "- フロントエンド: React");
    assert_eq!(v["prototype_code"], "```js\nconst free = total >= 10000;\n```\n\nseen=true");
}

#[tokio::test]
async fn upstream_error_fails_request() {
    let app = Router::new().route(
        "/v1/messages",
        post(|| async {
            (
                axum::http::StatusCode::TOO_MANY_REQUESTS,
                Json(json!({
                    "type": "error",
                    "error": { "type": "rate_limit_error", "message": "slow down" }
                })),
            )
        }),
    );
    let fake_url = spawn_test_server(app).await.base_url;
    let config = LlmConfig::new(Some("sk-ant-test".into())).with_base_url(&fake_url);
    let translator = Translator::new(&config).unwrap();
    let app = bizspec_server::build_app(Some(translator), &[]).unwrap();
    let server = spawn_test_server(app).await;

    let (status, v) = post_translate(&server.base_url, VALID_REQUIREMENT).await;
    assert_eq!(status, 500);
    let msg = v["detail"].as_str().unwrap();
    assert!(msg.contains("429"), "{msg}");
    assert!(msg.contains("slow down"), "{msg}");
}
