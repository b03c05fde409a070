//! Markdown rendition of a scan report.
//!
//! Layout:
//!
//! ```text
//! # Molecular Systems Biology - Latest Articles
//!
//! Scanned on: 2025-04-14
//!
//! ## <title>
//!
//! **Authors:** <authors>        (only when the listing had them)
//!
//! **Published:** <date>
//!
//! **Link:** [<url>](<url>)      (only when the listing had one)
//!
//! **Abstract:**
//! <abstract>
//!
//! ---
//!
//! ## <next title>
//! ```
//!
//! The `---` separator sits *between* entries; the last entry has none.

use crate::models::{ArticleRecord, JOURNAL_NAME};
use chrono::NaiveDate;
use itertools::Itertools;
use std::fmt::Write;

/// Printed instead of entries when the page yielded nothing.
pub const NO_ARTICLES: &str = "No articles were found on the table of contents page.";

const SEPARATOR: &str = "\n---\n\n";

/// Render records into a complete markdown document.
///
/// Never returns an empty body: with no records the header is followed by
/// [`NO_ARTICLES`].
pub fn render(records: &[ArticleRecord], date: NaiveDate) -> String {
    let mut md = String::new();
    writeln!(md, "# {JOURNAL_NAME} - Latest Articles\n").unwrap();
    writeln!(md, "Scanned on: {}\n", date.format("%Y-%m-%d")).unwrap();

    if records.is_empty() {
        writeln!(md, "{NO_ARTICLES}").unwrap();
        return md;
    }

    md.push_str(&records.iter().map(render_entry).join(SEPARATOR));
    md
}

fn render_entry(article: &ArticleRecord) -> String {
    let mut md = String::new();
    writeln!(md, "## {}\n", article.title).unwrap();
    if let Some(authors) = &article.authors {
        writeln!(md, "**Authors:** {authors}\n").unwrap();
    }
    writeln!(md, "**Published:** {}\n", article.publication_date).unwrap();
    if let Some(link) = &article.link {
        writeln!(md, "**Link:** [{link}]({link})\n").unwrap();
    }
    writeln!(md, "**Abstract:**\n{}", escape_block_start(&article.abstract_text)).unwrap();
    md
}

/// Backslash-escape a leading character that would turn a free-text line
/// into a heading, list, quote, or setext underline.
fn escape_block_start(text: &str) -> String {
    match text.chars().next() {
        Some('#' | '-' | '=' | '+' | '*' | '>') => format!("\\{text}"),
        _ => text.to_string(),
    }
}
