//! Exercises `GeminiProvider` against a local HTTP server.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use llm::{GeminiConfig, GeminiProvider};
use pipeline::{GenerationError, TextGenerator};
use serde_json::{json, Value};

#[derive(Debug, Clone)]
struct Captured {
    path: String,
    api_key: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    reply: Value,
    extra_headers: Vec<(&'static str, &'static str)>,
    captured: Arc<Mutex<Vec<Captured>>>,
}

async fn handle(
    State(stub): State<Stub>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    stub.captured.lock().unwrap().push(Captured {
        path: uri.path().to_string(),
        api_key: headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    let mut response = (stub.status, Json(stub.reply.clone())).into_response();
    for (name, value) in &stub.extra_headers {
        response
            .headers_mut()
            .insert(*name, value.parse().unwrap());
    }
    response
}

async fn serve(stub: Stub) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().fallback(handle).with_state(stub);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn stub(status: StatusCode, reply: Value) -> Stub {
    Stub {
        status,
        reply,
        extra_headers: Vec::new(),
        captured: Arc::new(Mutex::new(Vec::new())),
    }
}

fn provider(addr: SocketAddr) -> GeminiProvider {
    let mut config = GeminiConfig::new("test-key");
    config.base_url = format!("http://{addr}/v1beta");
    config.model = "gemini-test".to_string();
    config.temperature = Some(0.7);
    GeminiProvider::new(config).unwrap()
}

#[tokio::test]
async fn successful_call_returns_candidate_text() {
    let stub = stub(
        StatusCode::OK,
        json!({
            "candidates": [{
                "content": {"parts": [{"text": "Strategy: "}, {"text": "post daily."}], "role": "model"},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 4}
        }),
    );
    let captured = Arc::clone(&stub.captured);
    let addr = serve(stub).await;

    let text = provider(addr).generate("plan my channel").await.unwrap();
    assert_eq!(text, "Strategy: post daily.");

    let requests = captured.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/v1beta/models/gemini-test:generateContent");
    assert_eq!(requests[0].api_key.as_deref(), Some("test-key"));
    assert_eq!(
        requests[0].body["contents"][0]["parts"][0]["text"],
        "plan my channel"
    );
    assert!(requests[0].body["generationConfig"]["temperature"].is_number());
}

#[tokio::test]
async fn unauthorised_maps_to_authentication() {
    let addr = serve(stub(
        StatusCode::FORBIDDEN,
        json!({"error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}}),
    ))
    .await;

    let err = provider(addr).generate("x").await.unwrap_err();
    assert_eq!(
        err,
        GenerationError::Authentication {
            message: "API key not valid".to_string()
        }
    );
}

#[tokio::test]
async fn quota_maps_to_rate_limited_with_retry_hint() {
    let mut stub = stub(
        StatusCode::TOO_MANY_REQUESTS,
        json!({"error": {"code": 429, "message": "Resource has been exhausted"}}),
    );
    stub.extra_headers.push(("retry-after", "30"));
    let addr = serve(stub).await;

    match provider(addr).generate("x").await.unwrap_err() {
        GenerationError::RateLimited {
            message,
            retry_after,
        } => {
            assert_eq!(message, "Resource has been exhausted");
            assert_eq!(retry_after, Some(std::time::Duration::from_secs(30)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn empty_candidates_are_malformed() {
    let addr = serve(stub(StatusCode::OK, json!({"candidates": []}))).await;
    assert!(matches!(
        provider(addr).generate("x").await,
        Err(GenerationError::MalformedResponse { .. })
    ));
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    assert!(matches!(
        provider(addr).generate("x").await,
        Err(GenerationError::Transport { .. })
    ));
}
