//! Website fetch and visible-text extraction.

use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = "Mozilla/5.0";

/// Elements whose text counts as visible page content.
const CONTENT_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p, ul, ol, li";

/// Text under these elements is never shown to a visitor.
const HIDDEN_TAGS: &[&str] = &["script", "style", "meta", "noscript", "iframe"];

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch URL {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch URL {url} - Status code: {status}")]
    Status { url: String, status: u16 },
}

/// GETs `url` with a browser user agent and returns the body text.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, FetchError> {
    let http_err = |source| FetchError::Http {
        url: url.to_string(),
        source,
    };

    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .map_err(http_err)?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let html = response.text().await.map_err(http_err)?;
    debug!("Fetched {} bytes from {url}", html.len());
    Ok(html)
}

/// Headings, paragraphs and list text in document order, one chunk per line.
pub fn extract_visible_content(html: &str) -> String {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse(CONTENT_SELECTOR) else {
        return String::new();
    };

    document
        .select(&selector)
        .map(visible_text)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trimmed `<title>` text, or an empty string.
pub fn page_title(html: &str) -> String {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .map(|title| title.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn visible_text(element: ElementRef<'_>) -> String {
    element
        .descendants()
        .filter(|node| !node.ancestors().any(|a| is_hidden(a.value())))
        .filter_map(|node| node.value().as_text())
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_hidden(node: &scraper::Node) -> bool {
    node.as_element()
        .is_some_and(|e| HIDDEN_TAGS.contains(&e.name()))
}
