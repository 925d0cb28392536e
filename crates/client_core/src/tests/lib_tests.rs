use std::sync::Arc;

use super::*;
use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use shared::{
    domain::MaxLength,
    error::{NETWORK_ERROR_MESSAGE, SERVER_FALLBACK_MESSAGE},
};
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: &'static str,
    received: Arc<Mutex<Vec<SummarizeRequest>>>,
}

async fn handle_summarize(
    State(state): State<StubState>,
    Json(request): Json<SummarizeRequest>,
) -> Response {
    state.received.lock().await.push(request);
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
        .into_response()
}

async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "model_type": "extractive_summarizer"
    }))
}

async fn spawn_summarizer(status: StatusCode, body: &'static str) -> Result<(String, StubState)> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let state = StubState {
        status,
        body,
        received: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new()
        .route("/summarize", post(handle_summarize))
        .route("/health", get(handle_health))
        .with_state(state.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}"), state))
}

fn ten_word_request() -> SummarizeRequest {
    SummarizeRequest::new(
        "one two three four five six seven eight nine ten",
        MaxLength(100),
    )
}

#[tokio::test]
async fn summarize_returns_stats_on_success() {
    let (server_url, state) = spawn_summarizer(
        StatusCode::OK,
        r#"{"status":"success","summary":"X","original_length":100,"summary_length":20,"compression_ratio":80}"#,
    )
    .await
    .expect("spawn server");
    let client = SummarizerClient::new(&server_url).expect("client");

    let stats = client
        .summarize(&ten_word_request())
        .await
        .expect("summary");

    assert_eq!(stats.summary, "X");
    assert_eq!(stats.original_label(), "100 words");
    assert_eq!(stats.summary_label(), "20 words");
    assert_eq!(stats.compression_label(), "80% shorter");

    let received = state.received.lock().await;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].max_length, 100);
    assert_eq!(received[0].min_length, 30);
}

#[tokio::test]
async fn summarize_surfaces_server_error_message() {
    let (server_url, _state) = spawn_summarizer(StatusCode::BAD_REQUEST, r#"{"error":"bad input"}"#)
        .await
        .expect("spawn server");
    let client = SummarizerClient::new(&server_url).expect("client");

    let err = client
        .summarize(&ten_word_request())
        .await
        .expect_err("rejected");

    assert!(matches!(
        &err,
        ClientError::Rejected { status: 400, message: Some(m) } if m == "bad input"
    ));
    assert_eq!(err.user_message(), "bad input");
    assert_eq!(err.code(), Some(shared::error::ErrorCode::BadRequest));
}

#[tokio::test]
async fn ok_status_without_success_marker_is_rejected() {
    let (server_url, _state) = spawn_summarizer(StatusCode::OK, r#"{"status":"pending"}"#)
        .await
        .expect("spawn server");
    let client = SummarizerClient::new(&server_url).expect("client");

    let err = client
        .summarize(&ten_word_request())
        .await
        .expect_err("rejected");

    assert!(err.is_rejection());
    assert_eq!(err.user_message(), SERVER_FALLBACK_MESSAGE);
}

#[tokio::test]
async fn unreadable_body_reads_as_network_error() {
    let (server_url, _state) =
        spawn_summarizer(StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>")
            .await
            .expect("spawn server");
    let client = SummarizerClient::new(&server_url).expect("client");

    let err = client
        .summarize(&ten_word_request())
        .await
        .expect_err("decode failure");

    assert!(matches!(err, ClientError::Decode(_)));
    assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let client = SummarizerClient::new(&format!("http://{addr}")).expect("client");

    let err = client
        .summarize(&ten_word_request())
        .await
        .expect_err("connection refused");

    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
}

#[tokio::test]
async fn health_reports_model_type() {
    let (server_url, _state) = spawn_summarizer(StatusCode::OK, "{}")
        .await
        .expect("spawn server");
    let client = SummarizerClient::new(&server_url).expect("client");

    let health = client.health().await.expect("health");

    assert!(health.is_healthy());
    assert_eq!(health.model_type.as_deref(), Some("extractive_summarizer"));
}

#[test]
fn base_url_keeps_path_prefix() {
    let client = SummarizerClient::new("http://example.test/api").expect("client");
    assert_eq!(
        client.endpoint(SUMMARIZE_PATH).expect("endpoint").as_str(),
        "http://example.test/api/summarize"
    );
}

#[test]
fn rejects_malformed_server_url() {
    let err = SummarizerClient::new("not a url").expect_err("invalid");
    assert!(matches!(err, ClientError::InvalidUrl { .. }));
}
