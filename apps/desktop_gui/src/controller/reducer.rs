//! Form state and the Idle/Busy submit state machine, kept free of any widget code.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use shared::{
    domain::{CounterTier, MaxLength},
    draft,
    protocol::{SummarizeRequest, SummaryStats},
};

use crate::controller::events::{err_label, UiError, UiErrorContext, UiEvent};

pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);
pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "✓ Copied!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Output,
    Error,
}

#[derive(Debug, Clone)]
pub struct RenderedSummary {
    pub stats: SummaryStats,
    pub received_at: DateTime<Local>,
}

#[derive(Debug)]
pub struct FormState {
    pub draft: String,
    pub max_length: MaxLength,
    pub status: String,
    char_count: usize,
    phase: SubmitPhase,
    output: Option<RenderedSummary>,
    error: Option<String>,
    scroll_target: Option<ScrollTarget>,
    copied_at: Option<Instant>,
}

impl FormState {
    pub fn new(max_length: MaxLength) -> Self {
        Self {
            draft: String::new(),
            max_length,
            status: "Checking summarizer...".to_string(),
            char_count: 0,
            phase: SubmitPhase::Idle,
            output: None,
            error: None,
            scroll_target: None,
            copied_at: None,
        }
    }

    /// Must run after every edit of `draft`.
    pub fn on_input_changed(&mut self) {
        self.char_count = draft::char_count(&self.draft);
    }

    /// Replaces the draft the same way typing would.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.on_input_changed();
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn counter_tier(&self) -> CounterTier {
        CounterTier::for_count(self.char_count)
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == SubmitPhase::Busy
    }

    /// Starts a submission. Returns the request to send when the draft is
    /// valid; a validation failure is shown in the error area instead.
    pub fn begin_submit(&mut self) -> Option<SummarizeRequest> {
        if self.is_busy() {
            return None;
        }
        self.output = None;
        self.error = None;

        match draft::build_request(&self.draft, self.max_length) {
            Ok(request) => {
                self.phase = SubmitPhase::Busy;
                Some(request)
            }
            Err(err) => {
                tracing::debug!(%err, "draft rejected before submit");
                self.show_error(UiError::from_draft_error(&err).message().to_string());
                None
            }
        }
    }

    /// The request never left the UI (command queue full or gone).
    pub fn abort_submit(&mut self, reason: impl Into<String>) {
        self.phase = SubmitPhase::Idle;
        self.show_error(reason.into());
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
            }
            UiEvent::SummaryReady(stats) => {
                self.phase = SubmitPhase::Idle;
                self.error = None;
                self.copied_at = None;
                self.output = Some(RenderedSummary {
                    stats,
                    received_at: Local::now(),
                });
                self.scroll_target = Some(ScrollTarget::Output);
            }
            UiEvent::Error(err) => self.apply_error(err),
            UiEvent::HealthChecked(Ok(health)) => {
                let model = health.model_type.as_deref().unwrap_or("unknown model");
                self.status = if health.is_healthy() {
                    format!("Summarizer online ({model})")
                } else {
                    format!("Summarizer reports '{}' ({model})", health.status)
                };
            }
            UiEvent::HealthChecked(Err(reason)) => {
                self.status = format!("Summarizer unreachable: {reason}");
            }
        }
    }

    fn apply_error(&mut self, err: UiError) {
        match err.context() {
            UiErrorContext::Submit => {
                self.phase = SubmitPhase::Idle;
                self.show_error(err.message().to_string());
            }
            UiErrorContext::BackendStartup => {
                self.status = format!("{} error: {}", err_label(err.category()), err.message());
                if self.is_busy() {
                    self.phase = SubmitPhase::Idle;
                    self.show_error(err.message().to_string());
                }
            }
        }
    }

    fn show_error(&mut self, message: String) {
        self.error = Some(message);
        self.scroll_target = Some(ScrollTarget::Error);
    }

    pub fn output(&self) -> Option<&RenderedSummary> {
        self.output.as_ref()
    }

    pub fn summary_text(&self) -> Option<&str> {
        self.output.as_ref().map(|o| o.stats.summary.as_str())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// One-shot: the view scrolls to the returned area on the next frame only.
    pub fn take_scroll_target(&mut self) -> Option<ScrollTarget> {
        self.scroll_target.take()
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Time left on the copy confirmation, if it is still showing.
    pub fn copy_feedback_remaining(&self, now: Instant) -> Option<Duration> {
        let copied_at = self.copied_at?;
        COPY_FEEDBACK_DURATION
            .checked_sub(now.saturating_duration_since(copied_at))
            .filter(|left| !left.is_zero())
    }

    pub fn copy_label(&self, now: Instant) -> &'static str {
        if self.copy_feedback_remaining(now).is_some() {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
