//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{SummarizeApi, SummarizerClient};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Spawns the backend worker thread. It owns its own tokio runtime and
/// executes commands one at a time in arrival order.
pub fn launch(server_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let client = match SummarizerClient::new(&server_url) {
            Ok(client) => client,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: {err}"),
                )));
                tracing::error!(%server_url, "invalid summarizer url: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            tracing::info!(server_url = %client.base_url(), "backend worker ready");
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                let event = handle_command(&client, cmd).await;
                if ui_tx.send(event).is_err() {
                    tracing::debug!("ui event receiver dropped; stopping backend worker");
                    break;
                }
            }
        });
    });
}

pub async fn handle_command<A: SummarizeApi + ?Sized>(api: &A, cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::Summarize { request } => match api.summarize(&request).await {
            Ok(stats) => UiEvent::SummaryReady(stats),
            Err(err) => {
                tracing::warn!("summarize failed: {err}");
                UiEvent::Error(UiError::from_client_error(UiErrorContext::Submit, &err))
            }
        },
        BackendCommand::CheckHealth => match api.health().await {
            Ok(health) => UiEvent::HealthChecked(Ok(health)),
            Err(err) => {
                tracing::warn!("health check failed: {err}");
                UiEvent::HealthChecked(Err(err.to_string()))
            }
        },
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
