use shared::error::{rejection_message, ErrorCode, NETWORK_ERROR_MESSAGE};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid summarizer url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("failed to reach summarizer: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unreadable summarizer response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("summarizer rejected request (HTTP {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },
}

impl ClientError {
    /// Text for the form's error area. Only a rejection carries the server's
    /// own wording; anything that stops a readable reply is a connectivity
    /// problem from the user's point of view.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Rejected { message, .. } => rejection_message(message.as_deref()),
            ClientError::InvalidUrl { .. } | ClientError::Transport(_) | ClientError::Decode(_) => {
                NETWORK_ERROR_MESSAGE.to_string()
            }
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Rejected { status, .. } => Some(ErrorCode::from_status(*status)),
            _ => None,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::Rejected { .. })
    }
}
