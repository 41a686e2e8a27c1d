//! Data models for headlines and their summarized representations.
//!
//! This module defines the core data structures used throughout the pipeline:
//! - [`HeadlineRecord`]: one search result from the news provider
//! - [`Publisher`]: the outlet that published a headline
//! - [`SummaryEntry`]: one summarized article, ready to be written to disk
//!
//! Every entity is create-once-write-once: records come out of the feed
//! parser, entries are derived from one record plus one LLM call, and
//! nothing is mutated afterwards.

use crate::utils::{strip_publisher_suffix, truncate_published_date};

/// The outlet that published a headline.
///
/// Taken from the `<source>` element of the search feed.
#[derive(Debug, Clone, Default)]
pub struct Publisher {
    /// The publisher's display name (e.g., "Reuters").
    pub title: String,
}

/// One search-result item describing an article.
///
/// Produced by the headline fetcher from the provider's RSS feed. Field
/// order and content mirror the feed: the raw `title` still carries the
/// `" - <publisher>"` suffix and `published_date` is the provider's
/// RFC 2822-style `pubDate` string.
#[derive(Debug, Clone, Default)]
pub struct HeadlineRecord {
    /// Raw headline title, publisher suffix included.
    pub title: String,
    /// Short description or lede, as given by the provider.
    pub description: String,
    /// Publication date string, e.g. `"Tue, 05 Aug 2025 12:34:56 GMT"`.
    pub published_date: String,
    /// The provider's article URL (an aggregator link that redirects to
    /// the publisher's page).
    pub url: String,
    /// The publishing outlet.
    pub publisher: Publisher,
}

impl HeadlineRecord {
    /// The headline with the trailing `" - <publisher>"` suffix removed.
    pub fn display_title(&self) -> &str {
        strip_publisher_suffix(&self.title)
    }

    /// The entry header line: publisher name plus the truncated date.
    pub fn publisher_line(&self) -> String {
        format!(
            "{} {}",
            self.publisher.title,
            truncate_published_date(&self.published_date)
        )
    }
}

/// One summarized article, derived from a [`HeadlineRecord`] plus one
/// summarization call.
#[derive(Debug, Clone)]
pub struct SummaryEntry {
    /// Display title (publisher suffix stripped).
    pub title: String,
    /// Publisher name and truncated publication date.
    pub publisher_line: String,
    /// The article URL after following aggregator redirects.
    pub canonical_url: String,
    /// The model's summary of the article body.
    pub summary_text: String,
}

impl SummaryEntry {
    pub fn new(record: &HeadlineRecord, canonical_url: String, summary_text: String) -> Self {
        Self {
            title: record.display_title().to_string(),
            publisher_line: record.publisher_line(),
            canonical_url,
            summary_text,
        }
    }

    /// Render the entry as one block of the per-article output file.
    ///
    /// Layout: title line, publisher line, blank line, canonical URL, blank
    /// line, summary text, a 20-underscore separator, then three blank
    /// lines before the next entry.
    pub fn to_block(&self) -> String {
        format!(
            "{}\n{}\n\n{}\n\n{}\n{}\n\n\n\n",
            self.title,
            self.publisher_line,
            self.canonical_url,
            self.summary_text,
            "_".repeat(20)
        )
    }
}
