//! Rules applied to the text a user is composing before it is sent for summarization.

use thiserror::Error;

use crate::{domain::MaxLength, protocol::SummarizeRequest};

pub const MIN_WORDS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please enter some text to summarize.")]
    Empty,
    #[error("Please provide at least 10 words for summarization.")]
    TooFewWords { found: usize },
}

/// Displayed character count: UTF-16 code units of the raw, untrimmed text,
/// so characters outside the Basic Multilingual Plane count twice.
pub fn char_count(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Strips surrounding whitespace, including the byte-order mark U+FEFF.
pub fn trim_draft(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Words are separated by single spaces only; runs of spaces yield empty words
/// and newlines do not separate.
pub fn word_count(text: &str) -> usize {
    text.split(' ').count()
}

/// Returns the trimmed text when it may be submitted.
pub fn validate(text: &str) -> Result<&str, DraftError> {
    let trimmed = trim_draft(text);
    if trimmed.is_empty() {
        return Err(DraftError::Empty);
    }
    let found = word_count(trimmed);
    if found < MIN_WORDS {
        return Err(DraftError::TooFewWords { found });
    }
    Ok(trimmed)
}

pub fn build_request(text: &str, max_length: MaxLength) -> Result<SummarizeRequest, DraftError> {
    let text = validate(text)?;
    Ok(SummarizeRequest::new(text, max_length))
}

#[cfg(test)]
#[path = "tests/draft_tests.rs"]
mod tests;
