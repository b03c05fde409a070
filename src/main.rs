//! # MSB TOC Scanner
//!
//! Fetches the current-issue table of contents of *Molecular Systems
//! Biology*, extracts per-article metadata (title, publication date,
//! abstract), and writes a dated markdown report.
//!
//! ## Usage
//!
//! ```sh
//! msb_toc_scanner                  # writes reports/msb_articles_<YYYYMMDD>.md
//! msb_toc_scanner -o out --json    # also writes the JSON report
//! ```
//!
//! ## Architecture
//!
//! A one-shot, strictly sequential pipeline:
//! 1. **Fetching**: one GET for the TOC page (no retry)
//! 2. **Extraction**: CSS-selector walk over the parsed page, per-field fallbacks
//! 3. **Output**: render the whole report in memory, then write it atomically
//!
//! Network and filesystem failures are fatal and exit non-zero. An empty
//! page or missing fields are not.

use chrono::{Local, NaiveDate};
use clap::Parser;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use error::ScanError;
use models::Report;
use outputs::{json, markdown, report_filename, write_report};
use scrapers::{FetchOptions, fetch_html, http_client, msb};
use utils::ensure_writable_dir;

/// What a successful run produced.
#[derive(Debug)]
pub struct ScanSummary {
    pub articles: usize,
    pub markdown_path: PathBuf,
    pub json_path: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("msb_toc_scanner starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let today = Local::now().date_naive();
    match run(&args, today).await {
        Ok(summary) => {
            let elapsed = start_time.elapsed();
            info!(
                articles = summary.articles,
                path = %summary.markdown_path.display(),
                json = ?summary.json_path,
                millis = elapsed.as_millis() as u64,
                "Execution complete"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Scan failed; no report written");
            Err(e.into())
        }
    }
}

/// Fetch, extract, render, and write one report dated `today`.
///
/// The output directory is validated before the fetch so a bad path fails
/// fast. Nothing is written under it unless the fetch succeeds.
#[instrument(level = "info", skip_all, fields(url = %args.url, output_dir = %args.output_dir))]
async fn run(args: &Cli, today: NaiveDate) -> Result<ScanSummary, ScanError> {
    let output_dir = Path::new(&args.output_dir);
    ensure_writable_dir(output_dir).await?;

    let client = http_client(&FetchOptions {
        timeout: Duration::from_secs(args.timeout_secs),
        ..FetchOptions::default()
    })?;

    info!(url = %args.url, "Fetching table of contents");
    let html = fetch_html(&client, &args.url).await?;

    let articles = msb::extract_articles(&html, &args.url);
    if articles.is_empty() {
        warn!("No article units found on the page; writing an empty report");
    } else {
        info!(count = articles.len(), "Found articles");
    }

    let report = Report::new(&args.url, today, articles);
    let md = markdown::render(&report.articles, report.scanned_on);
    let markdown_path = write_report(output_dir, &report_filename(today, "md"), &md).await?;

    let json_path = if args.json {
        Some(json::write_report_json(&report, output_dir).await?)
    } else {
        None
    };

    info!(path = %markdown_path.display(), "Report saved");
    Ok(ScanSummary {
        articles: report.articles.len(),
        markdown_path,
        json_path,
    })
}
