//! Per-article summarization loop and the final digest aggregation.
//!
//! [`summarize_articles`] walks the headline list in order: extract the
//! article body, summarize it, resolve the canonical URL, and append one
//! formatted entry to the shared output file. Failures are isolated per
//! article; one bad record never stops the run. [`final_digest`] then folds
//! every per-article summary into a single consolidated text through a
//! second summarization call.

use crate::api::Summarize;
use crate::extract::ExtractContent;
use crate::models::{HeadlineRecord, SummaryEntry};
use crate::prompts::{ARTICLE_SUMMARY_TEMPLATE, FINAL_DIGEST_TEMPLATE};
use crate::utils::truncate_for_log;
use itertools::Itertools;
use std::error::Error;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info, instrument, warn};

/// Summarize each headline in input order, appending formatted entries to
/// `output_path`.
///
/// The output file is created fresh (truncating any previous run) before
/// the loop starts. Per-article errors are logged with the offending URL
/// and skipped; pages with no extractable content are skipped without being
/// counted as errors. Returns the summary texts that were produced, in
/// order.
#[instrument(level = "info", skip_all, fields(count = headlines.len(), path = %output_path.display()))]
pub async fn summarize_articles<E, S>(
    extractor: &E,
    provider: &S,
    headlines: &[HeadlineRecord],
    output_path: &Path,
) -> Result<Vec<String>, Box<dyn Error>>
where
    E: ExtractContent,
    S: Summarize,
{
    let mut file = File::create(output_path).await?;
    let mut summaries = Vec::new();

    for record in headlines {
        match summarize_one(extractor, provider, record, &mut file).await {
            Ok(Some(summary)) => summaries.push(summary),
            Ok(None) => {}
            Err(e) => {
                error!(url = %record.url, error = %e, "Failed to process article; skipping");
            }
        }
    }

    file.flush().await?;
    info!(
        written = summaries.len(),
        skipped = headlines.len() - summaries.len(),
        "Wrote per-article summaries"
    );
    Ok(summaries)
}

/// Process a single headline: extract, summarize, resolve, write.
///
/// Returns `Ok(None)` for the expected empty-content skip.
async fn summarize_one<E, S>(
    extractor: &E,
    provider: &S,
    record: &HeadlineRecord,
    file: &mut File,
) -> Result<Option<String>, Box<dyn Error>>
where
    E: ExtractContent,
    S: Summarize,
{
    let content = extractor.extract(&record.url).await?;
    if content.trim().is_empty() {
        warn!(url = %record.url, "No content found; skipping");
        return Ok(None);
    }

    let summary = provider.summarize(ARTICLE_SUMMARY_TEMPLATE, &content).await?;
    debug!(url = %record.url, preview = %truncate_for_log(&summary, 120), "Received article summary");

    let canonical_url = extractor.canonical_url(&record.url).await?;
    let entry = SummaryEntry::new(record, canonical_url, summary);
    file.write_all(entry.to_block().as_bytes()).await?;

    Ok(Some(entry.summary_text))
}

/// Consolidate the per-article summaries into the final digest.
///
/// The summaries are joined with single spaces into one document and run
/// through the final-digest instructions. Provider failures propagate.
#[instrument(level = "info", skip_all, fields(count = summaries.len()))]
pub async fn final_digest<S>(provider: &S, summaries: &[String]) -> Result<String, Box<dyn Error>>
where
    S: Summarize,
{
    let combined = summaries.iter().join(" ");
    provider.summarize(FINAL_DIGEST_TEMPLATE, &combined).await
}
