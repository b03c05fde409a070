//! Small helpers shared by the scraper and the output writers.
//!
//! - Whitespace normalisation for text pulled out of HTML
//! - String truncation for log fields
//! - File system validation for the output directory

use crate::error::ScanError;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Trim and collapse every whitespace run into a single space.
///
/// Text nodes from nested markup arrive with indentation and newlines in
/// them; a title has to fit on one markdown heading line.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_ws("  Cell\n   fate  "), "Cell fate");
/// ```
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` characters with an ellipsis and
/// byte count indicator appended. Cuts on a char boundary so multi-byte
/// titles never panic.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory (and any missing parents), then creates and
/// immediately deletes a probe file. Nothing is left behind on success.
///
/// # Errors
///
/// Returns [`ScanError::Io`] if the directory cannot be created or the probe
/// file cannot be written.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), ScanError> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| ScanError::io(path, e))?;

    let probe_path = path.join("..__probe_write__");
    fs::write(&probe_path, b"")
        .await
        .map_err(|e| ScanError::io(&probe_path, e))?;
    let _ = fs::remove_file(&probe_path).await;

    info!("Output directory is writable");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_ws() {
        assert_eq!(normalize_ws("  Cell\n   fate  "), "Cell fate");
        assert_eq!(normalize_ws("\t\n "), "");
        assert_eq!(normalize_ws("single"), "single");
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        let s = "ééééé";
        let result = truncate_for_log(s, 3);
        assert!(result.starts_with('é'));
        assert!(result.contains("bytes)"));
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");

        ensure_writable_dir(&nested).await.unwrap();

        assert!(nested.is_dir());
        assert_eq!(std::fs::read_dir(&nested).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_fails_on_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("occupied");
        std::fs::write(&file, "x").unwrap();

        let err = ensure_writable_dir(&file).await.unwrap_err();
        assert!(matches!(err, ScanError::Io { .. }));
    }
}
