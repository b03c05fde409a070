//! Data models for scanned articles and the report built from them.
//!
//! - [`ArticleRecord`]: one entry from the table of contents page
//! - [`Report`]: the ordered collection written out at the end of a run

use chrono::NaiveDate;
use serde::Serialize;

/// Placeholder used when a unit has no recognisable title.
pub const NO_TITLE: &str = "No title found";
/// Placeholder used when a unit has no recognisable publication date.
pub const NO_DATE: &str = "No date found";
/// Placeholder used when a unit carries no abstract snippet.
pub const NO_ABSTRACT: &str = "No abstract found";

/// Human-readable journal name used in report headers.
pub const JOURNAL_NAME: &str = "Molecular Systems Biology";

/// One article entry as found on the table of contents page.
///
/// The three core fields are always populated; when the page does not carry
/// a value, the matching placeholder ([`NO_TITLE`], [`NO_DATE`],
/// [`NO_ABSTRACT`]) is stored instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRecord {
    /// The article title, whitespace-collapsed.
    pub title: String,
    /// Publication date exactly as printed on the page (not parsed).
    pub publication_date: String,
    /// The abstract snippet shown in the listing.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Comma-joined author names, when the listing shows them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,
    /// Absolute URL of the article page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// The result of one scan, in page order.
#[derive(Debug, Serialize)]
pub struct Report {
    pub journal: String,
    pub source_url: String,
    pub scanned_on: NaiveDate,
    pub articles: Vec<ArticleRecord>,
}

impl Report {
    pub fn new(source_url: &str, scanned_on: NaiveDate, articles: Vec<ArticleRecord>) -> Self {
        Self {
            journal: JOURNAL_NAME.to_string(),
            source_url: source_url.to_string(),
            scanned_on,
            articles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ArticleRecord {
        ArticleRecord {
            title: "Gene regulatory networks".to_string(),
            publication_date: "14 April 2025".to_string(),
            abstract_text: "We map networks.".to_string(),
            authors: None,
            link: Some("https://www.embopress.org/doi/10.1038/s44320-025-00001-x".to_string()),
        }
    }

    #[test]
    fn test_report_serialization() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 14).unwrap();
        let report = Report::new("https://example.com/toc", date, vec![record()]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["journal"], JOURNAL_NAME);
        assert_eq!(json["scanned_on"], "2025-04-14");
        assert_eq!(json["articles"][0]["abstract"], "We map networks.");
        assert_eq!(json["articles"][0]["publication_date"], "14 April 2025");
    }

    #[test]
    fn test_missing_optional_fields_are_omitted() {
        let json = serde_json::to_value(record()).unwrap();
        assert!(json.get("authors").is_none());
        assert!(json.get("link").is_some());
    }
}
