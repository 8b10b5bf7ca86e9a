//! Page-Lens main entry point
//!
//! This is the command-line interface for the Page-Lens batch text analyzer.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use page_lens::config::{load_config_with_hash, Config};
use page_lens::output::{format_markdown_report, to_json, write_report};
use page_lens::{AnalysisResponse, Pipeline};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Page-Lens: cross-document text analytics
///
/// Page-Lens fetches every URL in the batch concurrently, extracts the visible
/// text, and compares the documents by word frequency, sentiment, and
/// readability, with an optional word cloud per document.
#[derive(Parser, Debug)]
#[command(name = "page-lens")]
#[command(version)]
#[command(about = "Compare web pages by word frequency, sentiment, and readability", long_about = None)]
struct Cli {
    /// URLs to analyze, in report order
    #[arg(value_name = "URL")]
    urls: Vec<String>,

    /// Path to TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Write the report to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Skip word cloud rendering
    #[arg(long)]
    no_word_clouds: bool,

    /// Analyze the URLs that could be fetched instead of rejecting the batch
    #[arg(long)]
    allow_partial: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Markdown,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let outcome = run(&cli).await;
    if let Err(e) = &outcome {
        tracing::error!("{:#}", e);
    }

    ExitCode::from(exit_status(&outcome))
}

/// Runs one batch and emits its report
async fn run(cli: &Cli) -> anyhow::Result<AnalysisResponse> {
    let config = load(cli)?;

    let mut pipeline = Pipeline::new(config).context("Failed to initialize pipeline")?;
    if cli.no_word_clouds {
        pipeline = pipeline.with_word_clouds(false);
    }
    if cli.allow_partial {
        pipeline = pipeline.with_reject_on_fetch_failure(false);
    }

    tracing::info!(
        "Analyzing {} URLs with {} workers",
        cli.urls.len(),
        pipeline.config().fetcher.workers
    );
    let response = pipeline.respond(&cli.urls).await;

    let report = match cli.format {
        Format::Json => to_json(&response).context("Failed to serialize report")?,
        Format::Markdown => format_markdown_report(&response),
    };

    match &cli.output {
        Some(path) => {
            write_report(&report, path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!("Report written to: {}", path.display());
        }
        None => println!("{}", report),
    }

    Ok(response)
}

/// Loads the config file if one was given, defaults otherwise
fn load(cli: &Cli) -> anyhow::Result<Config> {
    let Some(path) = &cli.config else {
        tracing::debug!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);
    Ok(config)
}

/// 0 for a completed report, 1 for a rejected batch, 2 for an internal
/// error or a setup failure (bad config, unwritable output)
fn exit_status(outcome: &anyhow::Result<AnalysisResponse>) -> u8 {
    match outcome {
        Ok(response) => match response.status_code() {
            200 => 0,
            400 => 1,
            _ => 2,
        },
        Err(_) => 2,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("page_lens=info,warn"),
            1 => EnvFilter::new("page_lens=debug,info"),
            2 => EnvFilter::new("page_lens=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
