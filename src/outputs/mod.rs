//! Output generation for scan reports.
//!
//! # Submodules
//!
//! - [`markdown`]: renders a [`Report`](crate::models::Report) to markdown and
//!   names the dated report file
//! - [`json`]: optional JSON rendition of the same report
//!
//! # Output Structure
//!
//! ```text
//! reports/
//! ├── msb_articles_20250414.md
//! └── msb_articles_20250414.json   # only with --json
//! ```
//!
//! Reports are rendered fully in memory and land on disk through
//! [`write_report`], so a file is either complete or absent.

pub mod json;
pub mod markdown;

use crate::error::ScanError;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

/// Fixed prefix of every report file name.
pub const REPORT_PREFIX: &str = "msb_articles";

/// `msb_articles_<YYYYMMDD>.<extension>`.
///
/// Deterministic for a given date; a second run on the same day targets the
/// same name and replaces the earlier report.
pub fn report_filename(date: NaiveDate, extension: &str) -> String {
    format!("{}_{}.{}", REPORT_PREFIX, date.format("%Y%m%d"), extension)
}

/// Write `contents` to `dir/filename`, creating `dir` (and parents) first.
///
/// The bytes go to a sibling `.tmp` file which is then renamed over the
/// target, so readers never observe a half-written report. An existing
/// report with the same name is replaced.
#[instrument(level = "info", skip(contents), fields(dir = %dir.display(), bytes = contents.len()))]
pub async fn write_report(dir: &Path, filename: &str, contents: &str) -> Result<PathBuf, ScanError> {
    fs::create_dir_all(dir)
        .await
        .map_err(|e| ScanError::io(dir, e))?;

    let target = dir.join(filename);
    let staging = dir.join(format!("{filename}.tmp"));

    if let Err(e) = fs::write(&staging, contents).await {
        let _ = fs::remove_file(&staging).await;
        return Err(ScanError::io(&staging, e));
    }
    if let Err(e) = fs::rename(&staging, &target).await {
        let _ = fs::remove_file(&staging).await;
        return Err(ScanError::io(&target, e));
    }

    info!(path = %target.display(), "Wrote report");
    Ok(target)
}
