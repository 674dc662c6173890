#![cfg(feature = "server")]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use readability_sandbox::server::{build_app, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_app(&ServerConfig::default())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/parse")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn parse_returns_result_and_markdown() {
    let body = json!({
        "html": "<html><head><title>Hi</title></head><body><p>A</p><p>B</p></body></html>",
        "parserType": "simple",
    });
    let (status, value) = send(app(), post_json(&body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["result"]["content"], "<p>A</p><p>B</p>");
    assert_eq!(value["result"]["textContent"], "A\nB");
    assert_eq!(value["result"]["title"], "Hi");
    assert_eq!(value["result"]["byline"], "");
    assert_eq!(value["result"]["dir"], "ltr");
    assert!(value["markdown"].as_str().unwrap().starts_with("# Hi\n\n"));
    assert!(value.get("error").is_none());
}

#[tokio::test]
async fn unknown_parser_is_bad_request() {
    let body = json!({ "html": "<p>x</p>", "parserType": "mercury" });
    let (status, value) = send(app(), post_json(&body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value["error"].as_str().unwrap().contains("Unsupported parser type"));
    assert!(value.get("result").is_none());
    assert!(value.get("markdown").is_none());
}

#[tokio::test]
async fn missing_fields_default_to_empty() {
    let (status, value) = send(app(), post_json("{}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value["error"].is_string());

    let (status, value) = send(app(), post_json(r#"{"parserType":"readability"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["result"]["content"], "");
    assert_eq!(value["result"]["dir"], "ltr");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (status, value) = send(app(), post_json("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value["error"].is_string());
}

#[tokio::test]
async fn oversized_body_is_bad_request() {
    let app = build_app(&ServerConfig {
        max_body_bytes: 16,
        ..ServerConfig::default()
    });
    let body = json!({ "html": "<p>well over sixteen bytes</p>", "parserType": "simple" });
    let (status, value) = send(app, post_json(&body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value["error"].is_string());
    assert!(value.get("result").is_none());
}

#[tokio::test]
async fn parsers_lists_every_backend() {
    let request = Request::builder().uri("/api/parsers").body(Body::empty()).unwrap();
    let (status, value) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        value,
        json!([
            { "key": "readability", "label": "Readability" },
            { "key": "simple", "label": "Simple" },
            { "key": "postlight", "label": "Postlight" },
            { "key": "defuddle", "label": "Defuddle" },
        ])
    );
}

#[tokio::test]
async fn sample_is_html() {
    let request = Request::builder().uri("/api/sample").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("<article>"));
}

#[tokio::test]
async fn sample_parses_with_every_backend() {
    for tag in ["readability", "simple", "postlight", "defuddle"] {
        let body = json!({ "html": readability_sandbox::server::SAMPLE_HTML, "parserType": tag });
        let (status, value) = send(app(), post_json(&body.to_string())).await;
        assert_eq!(status, StatusCode::OK, "{tag}");
        assert!(
            value["result"]["textContent"].as_str().unwrap().contains("redundancy"),
            "{tag}"
        );
    }
}

#[tokio::test]
async fn health_reports_version() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, value) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["status"], "ok");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
}
