//! UI layer: the summarizer form view and its palette.

pub mod app;
pub mod theme;

pub use app::SummarizerApp;
