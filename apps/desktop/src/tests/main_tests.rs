use std::sync::Mutex;

use async_trait::async_trait;
use client_core::ClientError;
use shared::protocol::{HealthReply, SummarizeRequest, SummaryStats};

use super::*;

struct FakeApi {
    summarize_result: Mutex<Option<Result<SummaryStats, ClientError>>>,
    health_result: Mutex<Option<Result<HealthReply, ClientError>>>,
    requests: Mutex<Vec<SummarizeRequest>>,
}

impl FakeApi {
    fn summarizing(result: Result<SummaryStats, ClientError>) -> Self {
        Self {
            summarize_result: Mutex::new(Some(result)),
            health_result: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn health(result: Result<HealthReply, ClientError>) -> Self {
        Self {
            summarize_result: Mutex::new(None),
            health_result: Mutex::new(Some(result)),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SummarizeApi for FakeApi {
    async fn summarize(&self, request: &SummarizeRequest) -> Result<SummaryStats, ClientError> {
        self.requests.lock().expect("lock").push(request.clone());
        self.summarize_result
            .lock()
            .expect("lock")
            .take()
            .expect("summarize result configured")
    }

    async fn health(&self) -> Result<HealthReply, ClientError> {
        self.health_result
            .lock()
            .expect("lock")
            .take()
            .expect("health result configured")
    }
}

fn text_args(text: &str, max_length: u32) -> SummarizeArgs {
    SummarizeArgs {
        text: Some(text.to_string()),
        file: None,
        sample: false,
        max_length,
        json: false,
    }
}

const TEN_WORDS: &str = "  one two three four five six seven eight nine ten  ";

#[tokio::test]
async fn short_draft_fails_without_calling_the_server() {
    let api = FakeApi::summarizing(Err(ClientError::Rejected {
        status: 500,
        message: None,
    }));

    let err = run_summarize(&api, &text_args("only three words", 100))
        .await
        .expect_err("short draft must fail");

    assert_eq!(
        err.to_string(),
        "Please provide at least 10 words for summarization."
    );
    assert!(api.requests.lock().expect("lock").is_empty());
}

#[tokio::test]
async fn blank_draft_reports_empty_message() {
    let api = FakeApi::summarizing(Err(ClientError::Rejected {
        status: 500,
        message: None,
    }));

    let err = run_summarize(&api, &text_args(" \n\t ", 100))
        .await
        .expect_err("blank draft must fail");

    assert_eq!(err.to_string(), "Please enter some text to summarize.");
    assert!(api.requests.lock().expect("lock").is_empty());
}

#[tokio::test]
async fn server_rejection_surfaces_its_message() {
    let api = FakeApi::summarizing(Err(ClientError::Rejected {
        status: 400,
        message: Some("bad input".to_string()),
    }));

    let err = run_summarize(&api, &text_args(TEN_WORDS, 100))
        .await
        .expect_err("rejection must fail");

    assert_eq!(err.to_string(), "bad input");
}

#[tokio::test]
async fn successful_summary_sends_trimmed_text_and_snapped_length() {
    let api = FakeApi::summarizing(Ok(SummaryStats {
        summary: "X".to_string(),
        original_length: 100,
        summary_length: 20,
        compression_ratio: 80.0,
    }));

    run_summarize(&api, &text_args(TEN_WORDS, 60))
        .await
        .expect("summarize succeeds");

    let sent = api.requests.lock().expect("lock");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].text, TEN_WORDS.trim());
    assert_eq!(sent[0].max_length, 50);
    assert_eq!(sent[0].min_length, 15);
}

#[tokio::test]
async fn degraded_health_is_an_error() {
    let api = FakeApi::health(Ok(HealthReply {
        status: "degraded".to_string(),
        model_type: None,
    }));

    let err = run_health(&api, false).await.expect_err("degraded must fail");

    assert!(err.to_string().contains("degraded"));
}

#[tokio::test]
async fn healthy_status_succeeds() {
    let api = FakeApi::health(Ok(HealthReply {
        status: "healthy".to_string(),
        model_type: Some("extractive_summarizer".to_string()),
    }));

    run_health(&api, true).await.expect("healthy succeeds");
}

#[test]
fn missing_input_source_is_reported() {
    let args = SummarizeArgs {
        text: None,
        file: None,
        sample: false,
        max_length: 100,
        json: false,
    };

    let err = args.input_text().expect_err("no input");

    assert_eq!(err.to_string(), "provide --text, --file or --sample");
}

#[test]
fn default_log_filter_matches_gui() {
    assert_eq!(DEFAULT_LOG_FILTER, "info");
    assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
}
