//! Industry news from the Google News RSS search feed.

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::profile::models::BusinessProfile;

const GOOGLE_NEWS_RSS: &str = "https://news.google.com/rss/search";
/// Headlines returned per lookup.
pub const MAX_HEADLINES: usize = 5;

#[derive(Debug, Error)]
pub enum NewsError {
    #[error("Failed to fetch news feed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("News feed returned status {0}")]
    Status(u16),

    #[error("Failed to parse news feed: {0}")]
    Parse(#[from] quick_xml::DeError),

    #[error("Invalid news feed URL: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub headline: String,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    items: Vec<RssItem>,
}

#[derive(Debug, Deserialize)]
struct RssItem {
    #[serde(default)]
    title: String,
    link: Option<String>,
}

/// Trimmed industry of a profile, or an empty string.
pub fn industry_from_profile(profile: &BusinessProfile) -> String {
    profile
        .industry
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

/// Search URL for `industry` (form-encoded, so spaces become `+`).
pub fn feed_url(industry: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(
        GOOGLE_NEWS_RSS,
        &[
            ("q", industry),
            ("hl", "en-IN"),
            ("gl", "IN"),
            ("ceid", "IN:en"),
        ],
    )
}

/// Parses an RSS 2.0 document and keeps its first `MAX_HEADLINES` items.
/// Untitled items among those are dropped, not replaced by later ones.
pub fn parse_feed(xml: &str) -> Result<Vec<NewsItem>, quick_xml::DeError> {
    let rss: Rss = quick_xml::de::from_str(xml)?;
    Ok(rss
        .channel
        .items
        .into_iter()
        .take(MAX_HEADLINES)
        .filter(|item| !item.title.trim().is_empty())
        .map(|item| NewsItem {
            headline: item.title.trim().to_string(),
            url: item.link.map(|l| l.trim().to_string()).filter(|l| !l.is_empty()),
        })
        .collect())
}

/// Latest headlines for `industry`. An empty industry returns no news without
/// touching the network.
pub async fn fetch_industry_news(
    client: &Client,
    industry: &str,
) -> Result<Vec<NewsItem>, NewsError> {
    let industry = industry.trim();
    if industry.is_empty() {
        return Ok(Vec::new());
    }

    let response = client.get(feed_url(industry)?).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(NewsError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    let items = parse_feed(&body)?;
    debug!("Fetched {} headlines for '{industry}'", items.len());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_with(count: usize) -> String {
        let items: String = (1..=count)
            .map(|i| {
                format!(
                    "<item><title>Headline {i} &amp; more</title>\
                     <link>https://news.example.com/{i}</link>\
                     <guid isPermaLink=\"false\">id-{i}</guid>\
                     <pubDate>Mon, 01 Jan 2024 00:00:00 GMT</pubDate>\
                     <source url=\"https://example.com\">Example</source></item>"
                )
            })
            .collect();
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <rss version=\"2.0\"><channel>\
             <title>\"bakery\" - Google News</title>\
             <link>https://news.google.com</link>\
             <language>en-IN</language>\
             {items}</channel></rss>"
        )
    }

    #[test]
    fn test_parse_feed_keeps_first_five_items() {
        let items = parse_feed(&feed_with(8)).unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].headline, "Headline 1 & more");
        assert_eq!(items[0].url.as_deref(), Some("https://news.example.com/1"));
        assert_eq!(items[4].headline, "Headline 5 & more");
    }

    #[test]
    fn test_parse_feed_with_few_items() {
        let items = parse_feed(&feed_with(2)).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_parse_feed_without_items() {
        let items = parse_feed(&feed_with(0)).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_item_without_link_has_no_url() {
        let xml = "<rss><channel><item><title>Only a title</title></item></channel></rss>";
        let items = parse_feed(xml).unwrap();
        assert_eq!(
            items,
            vec![NewsItem {
                headline: "Only a title".to_string(),
                url: None
            }]
        );
    }

    #[test]
    fn test_untitled_items_count_toward_the_first_five() {
        let xml = "<rss><channel>\
            <item><title>One</title></item>\
            <item><link>https://news.example.com/2</link></item>\
            <item><title>Three</title></item>\
            <item><title>Four</title></item>\
            <item><title>Five</title></item>\
            <item><title>Six</title></item>\
            </channel></rss>";
        let headlines: Vec<String> = parse_feed(xml)
            .unwrap()
            .into_iter()
            .map(|item| item.headline)
            .collect();
        assert_eq!(headlines, vec!["One", "Three", "Four", "Five"]);
    }

    #[test]
    fn test_items_interleaved_with_channel_fields() {
        let xml = "<rss><channel>\
            <item><title>First</title></item>\
            <lastBuildDate>Mon, 01 Jan 2024 00:00:00 GMT</lastBuildDate>\
            <item><title>Second</title></item>\
            </channel></rss>";
        let items = parse_feed(xml).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].headline, "Second");
    }

    #[test]
    fn test_parse_feed_rejects_non_rss() {
        assert!(parse_feed("<html><body>Not a feed</body></html>").is_err());
    }

    #[test]
    fn test_feed_url_encodes_spaces_as_plus() {
        let url = feed_url("real estate").unwrap();
        assert!(url.as_str().starts_with("https://news.google.com/rss/search?q=real+estate&hl=en-IN&gl=IN&ceid=IN"));
    }

    #[test]
    fn test_industry_from_profile() {
        let profile = BusinessProfile::named(None, Some("  Bakery ".into()));
        assert_eq!(industry_from_profile(&profile), "Bakery");
        assert_eq!(industry_from_profile(&BusinessProfile::default()), "");
    }

    #[tokio::test]
    async fn test_empty_industry_returns_no_news() {
        let items = fetch_industry_news(&Client::new(), "   ").await.unwrap();
        assert!(items.is_empty());
    }
}
