use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Entries taken from the head of each feed
    #[serde(default = "default_per_feed")]
    pub per_feed: usize,
    /// Recency window in hours
    #[serde(default = "default_window_hours")]
    pub window_hours: i64,
    /// Number of headlines in the final report
    #[serde(default = "default_top_count")]
    pub top_count: usize,
    #[serde(default = "default_feeds")]
    pub feeds: Vec<FeedConfig>,
}

fn default_per_feed() -> usize {
    5
}

fn default_window_hours() -> i64 {
    24
}

fn default_top_count() -> usize {
    10
}

fn default_feeds() -> Vec<FeedConfig> {
    [
        ("TechCrunch", "https://techcrunch.com/feed/"),
        ("The Verge", "https://www.theverge.com/rss/index.xml"),
        ("Wired", "https://www.wired.com/feed/rss"),
        ("Ars Technica", "https://arstechnica.com/feed/"),
        ("BBC Tech", "https://feeds.bbci.co.uk/news/technology/rss.xml"),
    ]
    .into_iter()
    .map(|(name, url)| FeedConfig {
        name: name.to_string(),
        url: url.to_string(),
    })
    .collect()
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedConfig {
    pub name: String,
    pub url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            per_feed: default_per_feed(),
            window_hours: default_window_hours(),
            top_count: default_top_count(),
            feeds: default_feeds(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path` when it exists, otherwise use the built-in source list.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a TOML string (useful for testing)
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn window(&self) -> chrono::Duration {
        chrono::Duration::hours(self.window_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_tunables() {
        assert_eq!(default_per_feed(), 5);
        assert_eq!(default_window_hours(), 24);
        assert_eq!(default_top_count(), 10);
    }

    #[test]
    fn test_default_feed_list() {
        let feeds = default_feeds();
        assert_eq!(feeds.len(), 5);
        assert_eq!(feeds[0].name, "TechCrunch");
        assert!(feeds.iter().all(|f| f.url.starts_with("https://")));
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
            top_count = 3
            window_hours = 48

            [[feeds]]
            name = "Test Feed"
            url = "https://example.com/feed.xml"

            [[feeds]]
            name = "Another Feed"
            url = "https://example.org/rss"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();

        let config = Config::load(temp_file.path()).unwrap();

        assert_eq!(config.top_count, 3);
        assert_eq!(config.window_hours, 48);
        assert_eq!(config.per_feed, 5); // Default value
        assert_eq!(config.feeds.len(), 2);
        assert_eq!(config.feeds[0].name, "Test Feed");
        assert_eq!(config.feeds[0].url, "https://example.com/feed.xml");
        assert_eq!(config.feeds[1].name, "Another Feed");
    }

    #[test]
    fn test_load_config_with_default_tunables() {
        let content = r#"
            [[feeds]]
            name = "Test Feed"
            url = "https://example.com/feed.xml"
        "#;

        let config = Config::from_str(content).unwrap();

        assert_eq!(config.per_feed, 5);
        assert_eq!(config.window_hours, 24);
        assert_eq!(config.top_count, 10);
        assert_eq!(config.feeds.len(), 1);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = Config::load("/nonexistent/path/feeds.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default("/nonexistent/path/feeds.toml").unwrap();
        assert_eq!(config.feeds.len(), 5);
        assert_eq!(config.top_count, 10);
    }

    #[test]
    fn test_load_or_default_existing_file() {
        let content = r#"
            [[feeds]]
            name = "Only Feed"
            url = "https://example.com/feed.xml"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();

        let config = Config::load_or_default(temp_file.path()).unwrap();
        assert_eq!(config.feeds.len(), 1);
        assert_eq!(config.feeds[0].name, "Only Feed");
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let content = "this is not valid toml {{{";

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();

        let result = Config::load(temp_file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_missing_required_fields() {
        let content = r#"
            [[feeds]]
            name = "Test Feed"
            # Missing url field
        "#;

        let result = Config::from_str(content);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_feeds_list() {
        let content = "feeds = []";

        let config = Config::from_str(content).unwrap();
        assert!(config.feeds.is_empty());
    }

    #[test]
    fn test_window_duration() {
        let config = Config {
            window_hours: 6,
            ..Config::default()
        };
        assert_eq!(config.window(), chrono::Duration::hours(6));
    }
}
