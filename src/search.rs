//! Headline fetcher backed by the Google News search feed.
//!
//! Queries `https://news.google.com/rss/search` for English-language US
//! coverage of a keyword inside a date window and parses the RSS response
//! into [`HeadlineRecord`]s.
//!
//! # Query construction
//!
//! The search string is the keyword plus `-site:` exclusion terms for a
//! fixed denylist of outlets, plus an `after:YYYY-MM-DD` bound computed as
//! today minus 30 days per requested month (calendar-naive on purpose; the
//! window is a convenience, not exact month arithmetic).

use crate::models::HeadlineRecord;
use chrono::{Duration, Local, NaiveDate};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::error::Error;
use tracing::{debug, info, instrument};
use url::Url;

const SEARCH_ENDPOINT: &str = "https://news.google.com/rss/search";

/// Outlets excluded from every search.
const EXCLUDED_SITES: [&str; 3] = ["yahoo.com", "foxnews.com", "msn.com"];

/// Start of the search window: today minus 30 days per month requested.
pub fn window_start(months_back: u32) -> NaiveDate {
    Local::now().date_naive() - Duration::days(30 * i64::from(months_back))
}

/// Build the provider query string: keyword, exclusion terms, date bound.
pub fn build_query(keyword: &str, start: NaiveDate) -> String {
    let mut query = String::from(keyword);
    for site in EXCLUDED_SITES {
        query.push_str(&format!(" -site:{site}"));
    }
    query.push_str(&format!(" after:{}", start.format("%Y-%m-%d")));
    query
}

/// Fetch up to `max_results` headline records for a keyword.
///
/// Records are returned in provider order, which is not guaranteed to be
/// chronological. A failed request or an unparseable feed propagates to the
/// caller; there is no recovery at this layer.
#[instrument(level = "info", skip(client))]
pub async fn fetch_headlines(
    client: &reqwest::Client,
    keyword: &str,
    months_back: u32,
    max_results: usize,
) -> Result<Vec<HeadlineRecord>, Box<dyn Error>> {
    let start = window_start(months_back);
    let query = build_query(keyword, start);
    let endpoint = format!(
        "{}?q={}&hl=en-US&gl=US&ceid=US:en",
        SEARCH_ENDPOINT,
        urlencoding::encode(&query)
    );
    let feed_url = Url::parse(&endpoint)?;
    debug!(url = %feed_url, "Requesting search feed");

    let body = client
        .get(feed_url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let mut records = parse_feed(&body)?;
    records.truncate(max_results);
    for record in &records {
        debug!(
            title = %record.title,
            published = %record.published_date,
            lede = %crate::utils::truncate_for_log(&record.description, 80),
            "Headline record"
        );
    }
    info!(count = records.len(), keyword, "Fetched headline records");
    Ok(records)
}

/// Which `<item>` child the parser is currently inside.
#[derive(Clone, Copy)]
enum ItemField {
    Title,
    Link,
    PubDate,
    Description,
    Source,
}

/// Parse an RSS 2.0 search feed into headline records.
///
/// Reads `title`, `link`, `pubDate`, `description`, and `<source>` from each
/// `<item>`. Text and CDATA payloads both occur in the wild; elements the
/// feed omits leave the corresponding field empty.
fn parse_feed(xml: &str) -> Result<Vec<HeadlineRecord>, Box<dyn Error>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut records = Vec::new();
    let mut in_item = false;
    let mut field: Option<ItemField> = None;
    let mut current = HeadlineRecord::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                field = match e.name().as_ref() {
                    b"item" => {
                        in_item = true;
                        current = HeadlineRecord::default();
                        None
                    }
                    b"title" if in_item => Some(ItemField::Title),
                    b"link" if in_item => Some(ItemField::Link),
                    b"pubDate" if in_item => Some(ItemField::PubDate),
                    b"description" if in_item => Some(ItemField::Description),
                    b"source" if in_item => Some(ItemField::Source),
                    _ => None,
                };
            }
            Event::Text(t) => {
                if let Some(f) = field {
                    append_field(&mut current, f, &t.xml_content()?);
                }
            }
            Event::CData(t) => {
                if let Some(f) = field {
                    append_field(&mut current, f, &String::from_utf8_lossy(&t.into_inner()));
                }
            }
            Event::End(e) => {
                if e.name().as_ref() == b"item" {
                    in_item = false;
                    records.push(std::mem::take(&mut current));
                }
                field = None;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    debug!(count = records.len(), "Parsed search feed");
    Ok(records)
}

fn append_field(record: &mut HeadlineRecord, field: ItemField, text: &str) {
    match field {
        ItemField::Title => record.title.push_str(text),
        ItemField::Link => record.url.push_str(text),
        ItemField::PubDate => record.published_date.push_str(text),
        ItemField::Description => record.description.push_str(text),
        ItemField::Source => record.publisher.title.push_str(text),
    }
}
