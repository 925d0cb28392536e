//! Copying the rendered summary: native clipboard first, toolkit clipboard as fallback.

use arboard::Clipboard;

pub trait ClipboardSink {
    fn name(&self) -> &'static str;
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// OS clipboard via `arboard`.
pub struct NativeClipboard;

impl ClipboardSink for NativeClipboard {
    fn name(&self) -> &'static str {
        "native"
    }

    fn set_text(&mut self, text: &str) -> Result<(), String> {
        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard
            .set_text(text.to_string())
            .map_err(|err| err.to_string())
    }
}

/// Hands the text to the windowing backend, which writes it at the end of the frame.
pub struct ToolkitClipboard<'a>(pub &'a egui::Context);

impl ClipboardSink for ToolkitClipboard<'_> {
    fn name(&self) -> &'static str {
        "toolkit"
    }

    fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.0.copy_text(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { via: &'static str },
    Failed(String),
}

impl CopyOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, CopyOutcome::Copied { .. })
    }
}

pub fn copy_with_fallback(
    primary: &mut dyn ClipboardSink,
    fallback: &mut dyn ClipboardSink,
    text: &str,
) -> CopyOutcome {
    match primary.set_text(text) {
        Ok(()) => CopyOutcome::Copied {
            via: primary.name(),
        },
        Err(primary_err) => {
            tracing::debug!(
                sink = primary.name(),
                "clipboard write failed, trying fallback: {primary_err}"
            );
            match fallback.set_text(text) {
                Ok(()) => CopyOutcome::Copied {
                    via: fallback.name(),
                },
                Err(fallback_err) => {
                    tracing::error!(
                        primary = %primary_err,
                        fallback = %fallback_err,
                        "copy failed"
                    );
                    CopyOutcome::Failed(fallback_err)
                }
            }
        }
    }
}
