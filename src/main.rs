//! CLI entry point for the SUS Rater tool.
//!
//! Fetches survey responses from a Google Sheet, a plain URL, or a local
//! CSV file, runs the SUS analysis pipeline, and exports a JSON report
//! plus the scored dataset as CSV. Falls back to the embedded sample
//! survey when acquisition or cleaning fails.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use sus_rater::{
    analyzers::analyzer::analyze,
    dataset::Dataset,
    fetch::{BasicClient, extract_sheet_id, fetch_bytes, fetch_sheet_csv},
    output::{log_summary, write_json_report, write_scored_csv},
    sample::sample_dataset,
};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "sus_rater")]
#[command(about = "A tool to score SUS usability surveys", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze survey responses from a sheet URL, plain URL, or CSV file
    Analyze {
        /// Google Sheets share URL, HTTP(S) URL, or local CSV path.
        /// Defaults to $SUS_SHEET_URL, then to the embedded sample.
        #[arg(value_name = "SOURCE")]
        source: Option<String>,

        /// Path for the JSON report
        #[arg(short, long, default_value = "sus_results.json")]
        json: String,

        /// Path for the scored-dataset CSV
        #[arg(short, long, default_value = "sus_scored.csv")]
        csv: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/sus_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("sus_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { source, json, csv } => {
            let source = source.or_else(|| std::env::var("SUS_SHEET_URL").ok());
            run_analysis(source.as_deref(), &json, &csv).await?;
        }
    }

    Ok(())
}

#[tracing::instrument(skip(json_path, csv_path))]
async fn run_analysis(source: Option<&str>, json_path: &str, csv_path: &str) -> Result<()> {
    let (dataset, is_sample) = acquire(source).await;

    let result = match analyze(&dataset) {
        Ok(result) => result,
        Err(e) if !is_sample => {
            // Data errors (empty sheet, no complete responses) are not
            // fatal to the run: demonstrate the pipeline on sample data.
            warn!(error = %e, "analysis failed, rerunning on the embedded sample");
            analyze(&sample_dataset())?
        }
        Err(e) => return Err(e),
    };

    log_summary(&result);

    let reported_source = if is_sample { None } else { source };
    write_json_report(json_path, &result, reported_source)?;
    write_scored_csv(csv_path, &result.scored)?;

    Ok(())
}

/// Loads the dataset from the given source, or the embedded sample when
/// no source is given or acquisition fails. The flag reports whether the
/// sample was used.
async fn acquire(source: Option<&str>) -> (Dataset, bool) {
    let Some(source) = source else {
        info!("no source given, using the embedded sample survey");
        return (sample_dataset(), true);
    };

    match load_source(source).await {
        Ok(dataset) => {
            info!(rows = dataset.len(), source, "survey data acquired");
            (dataset, false)
        }
        Err(e) => {
            warn!(error = %e, source, "acquisition failed, using the embedded sample survey");
            (sample_dataset(), true)
        }
    }
}

/// Loads raw CSV from a sheet URL, a plain URL, or a local file path.
async fn load_source(source: &str) -> Result<Dataset> {
    let bytes = if source.starts_with("http") {
        let client = BasicClient::new();
        match extract_sheet_id(source) {
            Some(sheet_id) => fetch_sheet_csv(&client, sheet_id).await?,
            None => fetch_bytes(&client, source).await?,
        }
    } else {
        std::fs::read(source)?
    };

    Dataset::from_csv_bytes(&bytes)
}
