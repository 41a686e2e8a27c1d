//! # News Digest
//!
//! A keyword news digest pipeline: search recent coverage, summarize each
//! article with an LLM, and consolidate everything into one final summary.
//!
//! ## Usage
//!
//! ```sh
//! news_digest "solar power" 2 --max_results 5
//! ```
//!
//! ## Architecture
//!
//! One sequential pipeline:
//! 1. **Search**: query the Google News feed for headlines in the window
//! 2. **Summarize**: fetch each article's text and summarize it, appending
//!    one formatted entry per article to `summaries/<keyword>_summary.txt`
//! 3. **Consolidate**: run the concatenated summaries through a second
//!    summarization call and write `summaries/<keyword>_final_summary.txt`
//!
//! Requires `OPENAI_API_KEY` in the environment (a local `.env` file is
//! honored).

use clap::Parser;
use std::error::Error;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod digest;
mod extract;
mod models;
mod prompts;
mod search;
mod utils;

use api::OpenAiChat;
use cli::Cli;
use extract::WebExtractor;
use utils::ensure_writable_dir;

const OUTPUT_DIR: &str = "summaries";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    // A local .env file supplies the API key during development
    dotenvy::dotenv().ok();

    let args = Cli::parse();
    debug!(keyword = %args.keyword, args.months, args.max_results, "Parsed CLI arguments");

    let start_time = std::time::Instant::now();
    info!("news_digest starting up");

    // Early check: ensure the output dir is writable
    ensure_writable_dir(OUTPUT_DIR).await?;

    let http = reqwest::Client::new();
    let provider = OpenAiChat::from_env(http.clone())?;
    let extractor = WebExtractor::new(http.clone());

    // ---- Search ----
    let headlines =
        search::fetch_headlines(&http, &args.keyword, args.months, args.max_results as usize)
            .await?;
    info!(count = headlines.len(), keyword = %args.keyword, "Headline search complete");

    // ---- Per-article summaries ----
    let summary_path = Path::new(OUTPUT_DIR).join(format!("{}_summary.txt", args.keyword));
    let summaries =
        digest::summarize_articles(&extractor, &provider, &headlines, &summary_path).await?;

    // ---- Final digest ----
    let final_text = digest::final_digest(&provider, &summaries).await?;
    let final_path = Path::new(OUTPUT_DIR).join(format!("{}_final_summary.txt", args.keyword));
    tokio::fs::write(&final_path, &final_text).await?;
    info!(path = %final_path.display(), "Wrote final digest");

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        articles = summaries.len(),
        "Execution complete"
    );
    println!(
        "News digest generated. Individual summaries and final summary saved in the '{OUTPUT_DIR}' folder."
    );

    Ok(())
}
