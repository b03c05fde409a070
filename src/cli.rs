//! Command-line interface definitions for the MSB scanner.
//!
//! Every option has a default, so the scanner runs with no arguments at all,
//! which is how cron invokes it.

use clap::Parser;

/// Current-issue table of contents for Molecular Systems Biology.
pub const DEFAULT_TOC_URL: &str = "https://www.embopress.org/toc/17444292/current";

/// Command-line arguments for the scanner.
///
/// # Examples
///
/// ```sh
/// # Defaults: fetch the current issue, write into ./reports
/// msb_toc_scanner
///
/// # Different directory, also emit JSON
/// msb_toc_scanner -o /srv/reports --json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for the report files (created if missing)
    #[arg(short, long, default_value = "reports")]
    pub output_dir: String,

    /// Table of contents page to scan. Overrides the MSB page only (e.g. a
    /// mirror or a saved copy); the layout and report title stay MSB's
    #[arg(short, long, default_value = DEFAULT_TOC_URL)]
    pub url: String,

    /// HTTP timeout in seconds (at least 1)
    #[arg(short, long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Also write the report as JSON next to the markdown file
    #[arg(long)]
    pub json: bool,
}
