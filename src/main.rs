mod aggregate;
mod config;
mod fetcher;
mod report;

use chrono::Utc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::aggregate::select_top;
use crate::config::Config;
use crate::fetcher::Fetcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; diagnostics go to stderr, the report to stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "news_digest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration, falling back to the built-in source list
    let config = Config::load_or_default("feeds.toml")?;
    info!("Loaded {} feeds from configuration", config.feeds.len());

    let fetcher = Fetcher::new(config.per_feed);
    let entries = fetcher.fetch_all(&config.feeds).await;

    let top = select_top(entries, Utc::now(), config.window(), config.top_count);
    print!("{}", report::render(&top));

    Ok(())
}
