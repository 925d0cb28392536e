use serde::{Deserialize, Serialize};

use crate::domain::MaxLength;

pub const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    pub max_length: u32,
    pub min_length: u32,
}

impl SummarizeRequest {
    pub fn new(text: impl Into<String>, max_length: MaxLength) -> Self {
        Self {
            text: text.into(),
            max_length: max_length.0,
            min_length: max_length.min_length(),
        }
    }
}

/// Body returned by `POST /summarize`, on success and failure alike.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummarizeReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub original_length: Option<u64>,
    #[serde(default)]
    pub summary_length: Option<u64>,
    #[serde(default)]
    pub compression_ratio: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SummarizeReply {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(SUCCESS_STATUS)
    }

    pub fn into_stats(self) -> Option<SummaryStats> {
        if !self.is_success() {
            return None;
        }
        Some(SummaryStats {
            summary: self.summary.unwrap_or_default(),
            original_length: self.original_length.unwrap_or_default(),
            summary_length: self.summary_length.unwrap_or_default(),
            compression_ratio: self.compression_ratio.unwrap_or_default(),
        })
    }
}

/// A successful summary with the statistics shown next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub summary: String,
    pub original_length: u64,
    pub summary_length: u64,
    pub compression_ratio: f64,
}

impl SummaryStats {
    pub fn original_label(&self) -> String {
        format!("{} words", self.original_length)
    }

    pub fn summary_label(&self) -> String {
        format!("{} words", self.summary_length)
    }

    pub fn compression_label(&self) -> String {
        format!("{}% shorter", self.compression_ratio)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReply {
    pub status: String,
    #[serde(default)]
    pub model_type: Option<String>,
}

impl HealthReply {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
