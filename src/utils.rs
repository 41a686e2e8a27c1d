//! String manipulation and file system helpers.
//!
//! This module provides the small helpers used across the pipeline:
//! - Display-title derivation from raw headline titles
//! - Published-date truncation for the entry header line
//! - Output directory validation
//! - String truncation for logging

use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Strip the trailing `" - <publisher>"` suffix from a raw headline title.
///
/// Google News titles carry the publisher name after the last `" - "`
/// delimiter. Everything before that last occurrence is the display title.
/// Titles without the delimiter are returned unchanged.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(strip_publisher_suffix("X - Y - Publisher"), "X - Y");
/// assert_eq!(strip_publisher_suffix("No delimiter here"), "No delimiter here");
/// ```
pub fn strip_publisher_suffix(title: &str) -> &str {
    match title.rfind(" - ") {
        Some(index) => &title[..index],
        None => title,
    }
}

/// Drop the last 13 characters of a published-date string.
///
/// The provider's `pubDate` values end in a fixed-width time-and-zone token
/// (`" 12:34:56 GMT"`); removing exactly 13 characters leaves the readable
/// date part. Strings of 13 characters or fewer truncate to empty.
///
/// Operates on character counts, not bytes, so a multi-byte date string
/// cannot split a UTF-8 boundary.
pub fn truncate_published_date(date: &str) -> &str {
    let chars = date.chars().count();
    if chars <= 13 {
        return "";
    }
    match date.char_indices().nth(chars - 13) {
        Some((index, _)) => &date[..index],
        None => date,
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` bytes with an ellipsis and byte
/// count indicator appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}…(+{} bytes)", &s[..max], s.len() - max)
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test by
/// creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable
/// (permission denied, read-only filesystem, etc.).
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_publisher_suffix_last_delimiter() {
        assert_eq!(strip_publisher_suffix("X - Y - Publisher"), "X - Y");
    }

    #[test]
    fn test_strip_publisher_suffix_single_delimiter() {
        assert_eq!(
            strip_publisher_suffix("Markets rally on jobs report - Reuters"),
            "Markets rally on jobs report"
        );
    }

    #[test]
    fn test_strip_publisher_suffix_no_delimiter() {
        assert_eq!(strip_publisher_suffix("No delimiter here"), "No delimiter here");
        assert_eq!(strip_publisher_suffix(""), "");
    }

    #[test]
    fn test_strip_publisher_suffix_hyphen_without_spaces() {
        // A bare hyphen is not the delimiter
        assert_eq!(strip_publisher_suffix("Build-up continues"), "Build-up continues");
    }

    #[test]
    fn test_truncate_published_date_sample() {
        assert_eq!(
            truncate_published_date("Tue, 05 Aug 2025 12:34:56 GMT"),
            "Tue, 05 Aug 2025"
        );
    }

    #[test]
    fn test_truncate_published_date_short_strings() {
        assert_eq!(truncate_published_date("12:34:56 GMT"), "");
        assert_eq!(truncate_published_date(""), "");
        // Exactly 13 characters also truncates to empty
        assert_eq!(truncate_published_date(" 12:34:56 GMT"), "");
    }

    #[test]
    fn test_truncate_published_date_multibyte() {
        // 14 characters, first is multi-byte; only the first survives
        assert_eq!(truncate_published_date("é 12:34:56 GMT"), "é");
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

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_missing() {
        let dir = std::env::temp_dir().join("news_digest_test_writable_dir");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.to_str().unwrap().to_string();

        ensure_writable_dir(&path).await.unwrap();
        assert!(dir.is_dir());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
