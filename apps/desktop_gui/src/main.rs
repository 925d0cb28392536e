mod backend_bridge;
mod config;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use shared::domain::MaxLength;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::SummarizerApp;

#[derive(Parser, Debug)]
#[command(about = "Desktop front end for the text summarizer")]
struct Args {
    /// Overrides the configured summarizer base URL.
    #[arg(long)]
    server_url: Option<String>,
    /// Initial value of the summary length selector (snapped to 50/100/150).
    #[arg(long)]
    max_length: Option<u32>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut settings = config::load_settings();
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    if let Some(max_length) = args.max_length {
        settings.default_max_length = MaxLength::nearest(max_length);
    }
    tracing::info!(
        server_url = %settings.server_url,
        default_max_length = settings.default_max_length.0,
        "starting summarizer gui"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(settings.server_url.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Text Summarizer")
            .with_inner_size([880.0, 760.0])
            .with_min_inner_size([560.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Text Summarizer",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SummarizerApp::new(
                cmd_tx,
                ui_rx,
                settings.server_url,
                settings.default_max_length,
            )))
        }),
    )
}
