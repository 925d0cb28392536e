use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use client_core::{SummarizeApi, SummarizerClient};
use shared::{domain::MaxLength, draft, samples};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(about = "Summarize text with a remote summarizer")]
struct Args {
    #[arg(long, env = "SUMMARIZER_URL", default_value = "http://127.0.0.1:5000")]
    server_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send text for summarization and print the result.
    Summarize(SummarizeArgs),
    /// Query the summarizer's health endpoint.
    Health {
        #[arg(long)]
        json: bool,
    },
}

#[derive(ClapArgs, Debug)]
struct SummarizeArgs {
    #[arg(long, conflicts_with_all = ["file", "sample"])]
    text: Option<String>,
    #[arg(long, conflicts_with = "sample")]
    file: Option<PathBuf>,
    /// Use one of the built-in sample paragraphs.
    #[arg(long)]
    sample: bool,
    #[arg(long, default_value_t = 100)]
    max_length: u32,
    #[arg(long)]
    json: bool,
}

impl SummarizeArgs {
    fn input_text(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return std::fs::read_to_string(path)
                .with_context(|| format!("failed to read input file '{}'", path.display()));
        }
        if self.sample {
            return Ok(samples::random_sample().to_string());
        }
        bail!("provide --text, --file or --sample")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let client = SummarizerClient::new(&args.server_url)?;
    match args.command {
        Command::Summarize(summarize) => run_summarize(&client, &summarize).await,
        Command::Health { json } => run_health(&client, json).await,
    }
}

async fn run_summarize(client: &impl SummarizeApi, args: &SummarizeArgs) -> Result<()> {
    let text = args.input_text()?;
    let max_length = MaxLength::nearest(args.max_length);
    if max_length.0 != args.max_length {
        tracing::warn!(
            requested = args.max_length,
            using = max_length.0,
            "max length snapped to nearest supported value"
        );
    }

    let request = draft::build_request(&text, max_length)?;
    let stats = client
        .summarize(&request)
        .await
        .map_err(|err| {
            tracing::debug!(code = ?err.code(), "summarize failed: {err}");
            anyhow::anyhow!(err.user_message())
        })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}\n", stats.summary);
        println!("Original:    {}", stats.original_label());
        println!("Summary:     {}", stats.summary_label());
        println!("Compression: {}", stats.compression_label());
    }
    Ok(())
}

async fn run_health(client: &impl SummarizeApi, json: bool) -> Result<()> {
    let health = client.health().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&health)?);
    } else {
        println!(
            "{} ({})",
            health.status,
            health.model_type.as_deref().unwrap_or("unknown model")
        );
    }
    if !health.is_healthy() {
        bail!("summarizer reported status '{}'", health.status);
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
