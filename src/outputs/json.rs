//! JSON rendition of a scan report.
//!
//! Written next to the markdown file when `--json` is given, under the same
//! dated base name:
//!
//! ```text
//! reports/
//! └── msb_articles_20250414.json
//! ```

use super::{report_filename, write_report};
use crate::error::ScanError;
use crate::models::Report;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Serialize `report` and write it to `<output_dir>/msb_articles_<YYYYMMDD>.json`.
///
/// # Errors
///
/// [`ScanError::Serialize`] if serialization fails, [`ScanError::Io`] if the
/// directory or file cannot be written.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir.display()))]
pub async fn write_report_json(report: &Report, output_dir: &Path) -> Result<PathBuf, ScanError> {
    let json = serde_json::to_string_pretty(report)?;
    let filename = report_filename(report.scanned_on, "json");
    write_report(output_dir, &filename, &json).await
}
