use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Which publishing backend the Facebook routes talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublisherKind {
    /// Fixed-success publisher; no network calls.
    Mock,
    /// Facebook Graph API.
    Graph,
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub schedule_file: PathBuf,
    pub fb_credentials_file: PathBuf,
    pub publisher: PublisherKind,
    pub fb_page_id: Option<String>,
    pub fb_access_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let publisher = parse_publisher(
            &std::env::var("PUBLISHER").unwrap_or_else(|_| "mock".to_string()),
        )?;
        let fb_page_id = optional_env("FB_PAGE_ID");
        let fb_access_token = optional_env("FB_ACCESS_TOKEN");

        if publisher == PublisherKind::Graph && (fb_page_id.is_none() || fb_access_token.is_none())
        {
            bail!("PUBLISHER=graph requires FB_PAGE_ID and FB_ACCESS_TOKEN to be set");
        }

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            schedule_file: std::env::var("SCHEDULE_FILE")
                .unwrap_or_else(|_| "weekly_schedule.json".to_string())
                .into(),
            fb_credentials_file: std::env::var("FB_CREDENTIALS_FILE")
                .unwrap_or_else(|_| "fb_credentials.json".to_string())
                .into(),
            publisher,
            fb_page_id,
            fb_access_token,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_publisher(raw: &str) -> Result<PublisherKind> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "mock" => Ok(PublisherKind::Mock),
        "graph" => Ok(PublisherKind::Graph),
        other => bail!("PUBLISHER must be 'mock' or 'graph', got '{other}'"),
    }
}
