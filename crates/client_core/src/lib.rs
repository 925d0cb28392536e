use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{HealthReply, SummarizeReply, SummarizeRequest, SummaryStats};
use tracing::{debug, info, warn};
use url::Url;

pub mod error;

pub use error::ClientError;

const SUMMARIZE_PATH: &str = "summarize";
const HEALTH_PATH: &str = "health";

/// Remote summarization service as seen by the front ends.
#[async_trait]
pub trait SummarizeApi: Send + Sync {
    async fn summarize(&self, request: &SummarizeRequest) -> Result<SummaryStats, ClientError>;
    async fn health(&self) -> Result<HealthReply, ClientError>;
}

#[derive(Debug, Clone)]
pub struct SummarizerClient {
    http: Client,
    base_url: Url,
}

impl SummarizerClient {
    pub fn new(server_url: &str) -> Result<Self, ClientError> {
        Self::with_http(Client::new(), server_url)
    }

    pub fn with_http(http: Client, server_url: &str) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(server_url.trim()).map_err(|source| ClientError::InvalidUrl {
            url: server_url.to_string(),
            source,
        })?;
        // Keep any path prefix when joining endpoint names onto the base.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|source| ClientError::InvalidUrl {
                url: format!("{}{path}", self.base_url),
                source,
            })
    }
}

#[async_trait]
impl SummarizeApi for SummarizerClient {
    async fn summarize(&self, request: &SummarizeRequest) -> Result<SummaryStats, ClientError> {
        let url = self.endpoint(SUMMARIZE_PATH)?;
        debug!(
            %url,
            bytes = request.text.len(),
            max_length = request.max_length,
            min_length = request.min_length,
            "sending summarize request"
        );
        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        let reply: SummarizeReply = response.json().await.map_err(ClientError::Decode)?;
        let message = reply.error.clone();

        match reply.into_stats() {
            Some(stats) if status.is_success() => {
                info!(
                    original_length = stats.original_length,
                    summary_length = stats.summary_length,
                    compression_ratio = stats.compression_ratio,
                    "summary received"
                );
                Ok(stats)
            }
            _ => {
                warn!(status = status.as_u16(), error = ?message, "summarizer rejected request");
                Err(ClientError::Rejected {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    async fn health(&self) -> Result<HealthReply, ClientError> {
        let url = self.endpoint(HEALTH_PATH)?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message: None,
            });
        }
        let reply: HealthReply = response.json().await.map_err(ClientError::Decode)?;
        debug!(status = %reply.status, model_type = ?reply.model_type, "health reply");
        Ok(reply)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
