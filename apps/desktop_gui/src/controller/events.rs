//! UI/backend events and error modeling for the summarizer form.

use client_core::ClientError;
use shared::{
    draft::DraftError,
    protocol::{HealthReply, SummaryStats},
};

pub enum UiEvent {
    Info(String),
    SummaryReady(SummaryStats),
    Error(UiError),
    HealthChecked(Result<HealthReply, String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Server,
    Transport,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Submit,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("timeout")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("transport")
            || message_lower.contains("unavailable")
            || message_lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("malformed")
        {
            UiErrorCategory::Validation
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    /// Keeps the client's own classification and carries the user-facing text.
    pub fn from_client_error(context: UiErrorContext, err: &ClientError) -> Self {
        let category = if err.is_rejection() {
            UiErrorCategory::Server
        } else {
            UiErrorCategory::Transport
        };
        Self {
            category,
            context,
            message: err.user_message(),
        }
    }

    pub fn from_draft_error(err: &DraftError) -> Self {
        Self {
            category: UiErrorCategory::Validation,
            context: UiErrorContext::Submit,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Server => "Server",
        UiErrorCategory::Transport => "Network",
        UiErrorCategory::Unknown => "Unexpected",
    }
}
