use std::time::Duration;

use chrono::{DateTime, Utc};
use feed_rs::parser;
use reqwest::Client;
use thiserror::Error;
use tracing::{error, info};

use crate::config::FeedConfig;

/// A feed entry after defensive field extraction.
///
/// `source` is always the configured display name of the feed the entry
/// came from. `title` and `link` are whatever the feed provided, empty
/// when absent. `published` is `None` when the entry carried neither a
/// published nor an updated timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub title: String,
    pub source: String,
    pub published: Option<DateTime<Utc>>,
    pub link: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed feed: {0}")]
    Parse(#[from] feed_rs::parser::ParseFeedError),
}

pub struct Fetcher {
    client: Client,
    per_feed: usize,
}

impl Fetcher {
    pub fn new(per_feed: usize) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("NewsDigest/1.0 (RSS Aggregator)")
            .build()
            .expect("Failed to create HTTP client");

        Self { client, per_feed }
    }

    /// Fetch every configured feed in source-list order.
    ///
    /// A feed that fails is logged and skipped; its entries are simply
    /// absent from the result. One feed's failure never aborts the run.
    pub async fn fetch_all(&self, feeds: &[FeedConfig]) -> Vec<Headline> {
        let mut all = Vec::new();

        for feed in feeds {
            match self.fetch_feed(feed).await {
                Ok(entries) => {
                    info!("Fetched {} entries from '{}'", entries.len(), feed.name);
                    all.extend(entries);
                }
                Err(e) => error!("Error fetching {}: {}", feed.name, e),
            }
        }

        all
    }

    /// Fetch and parse one feed, keeping its first `per_feed` entries.
    pub async fn fetch_feed(&self, feed: &FeedConfig) -> Result<Vec<Headline>, FetchError> {
        info!("Fetching feed: {} ({})", feed.name, feed.url);

        let response = self.client.get(&feed.url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        parse_headlines(&bytes, &feed.name, self.per_feed)
    }
}

/// Parse raw feed bytes into normalized headlines, bounded to the first
/// `limit` entries.
pub fn parse_headlines(
    bytes: &[u8],
    source: &str,
    limit: usize,
) -> Result<Vec<Headline>, FetchError> {
    let parsed = parser::parse(bytes)?;

    Ok(parsed
        .entries
        .into_iter()
        .take(limit)
        .map(|entry| normalize(entry, source))
        .collect())
}

fn normalize(entry: feed_rs::model::Entry, source: &str) -> Headline {
    let title = entry.title.map(|t| t.content).unwrap_or_default();

    let link = entry
        .links
        .first()
        .map(|l| l.href.clone())
        .unwrap_or_default();

    // Prefer the published date, fall back to updated
    let published: Option<DateTime<Utc>> = entry.published.or(entry.updated);

    Headline {
        title,
        source: source.to_string(),
        published,
        link,
    }
}
