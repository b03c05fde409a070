//! Molecular Systems Biology table-of-contents scraper.
//!
//! The journal is hosted on the EMBO Press (Atypon/Wiley) platform. Its
//! current-issue page lists one block per article; which class names wrap
//! that block has changed across redesigns, so every lookup below is a
//! priority list of selectors and the first non-empty match wins.
//!
//! # Resilience
//!
//! Extraction is best effort per field. A unit missing its title, date, or
//! abstract still yields a record with the matching placeholder, and the
//! remaining units are processed normally.

use crate::models::{ArticleRecord, NO_ABSTRACT, NO_DATE, NO_TITLE};
use crate::utils::{normalize_ws, truncate_for_log};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// One article entry on the page. Older layouts used `pb-card`, the
/// current one uses `issue-item`.
static UNIT_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.issue-item, div.pb-card, div.issue-items__item").unwrap()
});

static SELECTORS: Lazy<FieldSelectors> = Lazy::new(FieldSelectors::msb);

/// Per-field selector lists, tried in order inside a unit.
struct FieldSelectors {
    title: Vec<Selector>,
    date: Vec<Selector>,
    abstract_text: Vec<Selector>,
    authors: Vec<Selector>,
    link: Vec<Selector>,
}

impl FieldSelectors {
    fn msb() -> Self {
        Self {
            title: parse_all(&[
                "h3.issue-item__title",
                "h2.item__title",
                "h2.citation__title",
                ".issue-item__title",
            ]),
            date: parse_all(&[
                "span.epub-section__date",
                "time.article-date",
                ".issue-item__header .ePubDate span:last-child",
                "time",
            ]),
            abstract_text: parse_all(&[
                "div.issue-item__abstract",
                "div.article-section__abstract",
                "div[class*=\"abstract\"]",
                "section[class*=\"abstract\"]",
                ".hlFld-Abstract",
            ]),
            authors: parse_all(&["ul.loa li", ".issue-item__loa li", ".loa-authors a"]),
            link: parse_all(&["a.issue-item__title", ".issue-item__title a", "h2 a"]),
        }
    }
}

fn parse_all(selectors: &[&str]) -> Vec<Selector> {
    selectors
        .iter()
        .map(|s| Selector::parse(s).unwrap())
        .collect()
}

/// Extract every article unit from a TOC page, in document order.
///
/// Returns an empty vector when the page has no recognisable units; that is
/// a valid outcome, not an error. `base_url` is the page's own URL and is
/// used to resolve relative article links.
#[instrument(level = "info", skip_all, fields(%base_url, bytes = html.len()))]
pub fn extract_articles(html: &str, base_url: &str) -> Vec<ArticleRecord> {
    let document = Html::parse_document(html);
    let base = match Url::parse(base_url) {
        Ok(u) => Some(u),
        Err(e) => {
            warn!(error = %e, "Base URL does not parse; relative links will be dropped");
            None
        }
    };

    let units = outermost_units(&document);
    let articles: Vec<ArticleRecord> = units
        .into_iter()
        .enumerate()
        .map(|(index, unit)| extract_unit(index, unit, base.as_ref()))
        .collect();

    info!(count = articles.len(), "Extracted articles from TOC");
    articles
}

/// Matched units, minus any unit nested inside another matched unit.
fn outermost_units(document: &Html) -> Vec<ElementRef<'_>> {
    let matched: Vec<ElementRef<'_>> = document.select(&UNIT_SELECTOR).collect();
    let ids: HashSet<_> = matched.iter().map(|u| u.id()).collect();

    matched
        .into_iter()
        .filter(|unit| !unit.ancestors().any(|a| ids.contains(&a.id())))
        .collect()
}

fn extract_unit(index: usize, unit: ElementRef<'_>, base: Option<&Url>) -> ArticleRecord {
    let sel = &*SELECTORS;

    let title = first_text(unit, &sel.title).unwrap_or_else(|| {
        debug!(index, field = "title", "Field missing; using placeholder");
        NO_TITLE.to_string()
    });
    let publication_date = first_text(unit, &sel.date).unwrap_or_else(|| {
        debug!(index, field = "date", "Field missing; using placeholder");
        NO_DATE.to_string()
    });
    let abstract_text = first_text(unit, &sel.abstract_text).unwrap_or_else(|| {
        debug!(index, field = "abstract", "Field missing; using placeholder");
        NO_ABSTRACT.to_string()
    });

    let record = ArticleRecord {
        title,
        publication_date,
        abstract_text,
        authors: authors(unit, &sel.authors),
        link: link(unit, &sel.link, base),
    };
    debug!(index, title = %truncate_for_log(&record.title, 80), "Parsed article unit");
    record
}

/// Text of the first element, across the selector list in priority order,
/// whose normalised text is non-empty.
fn first_text(unit: ElementRef<'_>, selectors: &[Selector]) -> Option<String> {
    selectors
        .iter()
        .flat_map(|sel| unit.select(sel))
        .map(|el| normalize_ws(&el.text().collect::<String>()))
        .find(|text| !text.is_empty())
}

/// All author names from the first selector that yields any, comma-joined.
fn authors(unit: ElementRef<'_>, selectors: &[Selector]) -> Option<String> {
    selectors.iter().find_map(|sel| {
        let names: Vec<String> = unit
            .select(sel)
            .map(|el| normalize_ws(&el.text().collect::<String>()))
            .map(|name| name.trim_end_matches(',').trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        (!names.is_empty()).then(|| names.join(", "))
    })
}

/// Absolute URL of the article page. Relative hrefs are joined onto `base`.
fn link(unit: ElementRef<'_>, selectors: &[Selector], base: Option<&Url>) -> Option<String> {
    let href = selectors
        .iter()
        .flat_map(|sel| unit.select(sel))
        .filter_map(|el| el.value().attr("href"))
        .map(str::trim)
        .find(|href| !href.is_empty())?;

    let resolved = match base {
        Some(base) => base.join(href),
        None => Url::parse(href),
    };
    match resolved {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            warn!(%href, error = %e, "Could not resolve article link");
            None
        }
    }
}
