//! Generic web-content extraction.
//!
//! Turns an article URL into readable text without any per-outlet
//! knowledge: fetch the page, keep headline and paragraph text, drop
//! everything else. Also resolves canonical article URLs, since news
//! aggregator links typically redirect to the publisher's page.
//!
//! The [`ExtractContent`] trait is the seam the summarizer loop is generic
//! over, so per-article behavior stays testable without a network.

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{info, instrument};
use url::Url;

static HEADLINE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());
static ARTICLE_PARAGRAPHS: Lazy<Selector> = Lazy::new(|| Selector::parse("article p").unwrap());
static ALL_PARAGRAPHS: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Content fetching seam for the per-article pipeline.
pub trait ExtractContent {
    /// Fetch an article and strip it to readable text.
    ///
    /// An empty string means the page yielded no content; that is an
    /// expected outcome, not an error.
    async fn extract(&self, url: &str) -> Result<String, Box<dyn Error>>;

    /// Resolve the canonical article URL by following redirects.
    async fn canonical_url(&self, url: &str) -> Result<String, Box<dyn Error>>;
}

/// [`ExtractContent`] implementation over a shared HTTP client.
#[derive(Debug)]
pub struct WebExtractor {
    client: Client,
}

impl WebExtractor {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ExtractContent for WebExtractor {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn extract(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let target = Url::parse(url)?;
        let body = self
            .client
            .get(target)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let content = extract_text(&body);
        info!(bytes = content.len(), "Extracted article text");
        Ok(content)
    }

    #[instrument(level = "info", skip_all, fields(%url))]
    async fn canonical_url(&self, url: &str) -> Result<String, Box<dyn Error>> {
        // HEAD is enough; the client follows the redirect chain and the
        // response carries the final URL whatever its status.
        let response = self.client.head(url).send().await?;
        Ok(response.url().as_str().to_string())
    }
}

/// Strip an HTML document to its headline and paragraph text.
///
/// Prefers paragraphs inside an `<article>` element when the page has one,
/// falling back to every `<p>` on the page. Runs of whitespace inside each
/// block collapse to single spaces; blocks are joined with newlines.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut blocks: Vec<String> = Vec::new();

    for element in document.select(&HEADLINE_SELECTOR) {
        push_block(&mut blocks, element);
    }

    let scoped: Vec<_> = document.select(&ARTICLE_PARAGRAPHS).collect();
    if scoped.is_empty() {
        for element in document.select(&ALL_PARAGRAPHS) {
            push_block(&mut blocks, element);
        }
    } else {
        for element in scoped {
            push_block(&mut blocks, element);
        }
    }

    blocks.join("\n")
}

fn push_block(blocks: &mut Vec<String>, element: scraper::ElementRef<'_>) {
    let text = element.text().collect::<Vec<_>>().join(" ");
    let text = WHITESPACE_RUNS.replace_all(&text, " ");
    let text = text.trim();
    if !text.is_empty() {
        blocks.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_prefers_article_scope() {
        let html = r#"
            <html><body>
              <h1>Storm slams coast</h1>
              <p>Navigation junk that should be ignored.</p>
              <article>
                <p>A strong storm   made
                   landfall overnight.</p>
                <p>Thousands lost power.</p>
              </article>
            </body></html>"#;

        let text = extract_text(html);
        assert_eq!(
            text,
            "Storm slams coast\nA strong storm made landfall overnight.\nThousands lost power."
        );
    }

    #[test]
    fn test_extract_text_falls_back_to_all_paragraphs() {
        let html = "<html><body><p>First.</p><div><p>Second.</p></div></body></html>";
        assert_eq!(extract_text(html), "First.\nSecond.");
    }

    #[test]
    fn test_extract_text_nested_markup() {
        let html = "<article><p>Winds hit <strong>90</strong> mph.</p></article>";
        assert_eq!(extract_text(html), "Winds hit 90 mph.");
    }

    #[test]
    fn test_extract_text_empty_page() {
        assert_eq!(extract_text("<html><body><div>no paragraphs</div></body></html>"), "");
        assert_eq!(extract_text(""), "");
    }

    #[test]
    fn test_extract_text_skips_blank_paragraphs() {
        let html = "<p>   </p><p>Real text.</p>";
        assert_eq!(extract_text(html), "Real text.");
    }
}
