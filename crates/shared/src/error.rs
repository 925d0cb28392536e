use serde::{Deserialize, Serialize};

pub const SERVER_FALLBACK_MESSAGE: &str = "An error occurred while generating the summary.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    BadRequest,
    NotFound,
    RateLimited,
    Internal,
    Unknown,
}

impl ErrorCode {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => ErrorCode::BadRequest,
            404 => ErrorCode::NotFound,
            429 => ErrorCode::RateLimited,
            500..=599 => ErrorCode::Internal,
            _ => ErrorCode::Unknown,
        }
    }
}

/// Text shown to the user for a rejected request: the server's own message
/// when it sent a non-empty one.
pub fn rejection_message(server_message: Option<&str>) -> String {
    match server_message {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => SERVER_FALLBACK_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_http_status_to_code() {
        assert_eq!(ErrorCode::from_status(400), ErrorCode::BadRequest);
        assert_eq!(ErrorCode::from_status(503), ErrorCode::Internal);
        assert_eq!(ErrorCode::from_status(200), ErrorCode::Unknown);
    }

    #[test]
    fn rejection_prefers_server_message() {
        assert_eq!(rejection_message(Some("bad input")), "bad input");
        assert_eq!(rejection_message(Some("")), SERVER_FALLBACK_MESSAGE);
        assert_eq!(rejection_message(None), SERVER_FALLBACK_MESSAGE);
    }
}
