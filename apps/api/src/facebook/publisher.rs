//! Publisher: pluggable, trait-based backend for connecting a page and posting to it.
//!
//! Default: `MockPublisher` (fixed success, no network).
//! `GraphPublisher` talks to the Facebook Graph API using configured page credentials.
//!
//! `AppState` holds an `Arc<dyn Publisher>`, chosen at startup via `PUBLISHER`.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::facebook::credentials::FacebookCredentials;

const GRAPH_API_BASE: &str = "https://graph.facebook.com";

const MOCK_PAGE_ID: &str = "1234567890";
const MOCK_ACCESS_TOKEN: &str = "mock_fb_access_token";

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Graph API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Outcome of a successful publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResult {
    pub success: bool,
    pub post_id: String,
    pub post_link: String,
}

#[async_trait]
pub trait Publisher: Send + Sync {
    /// Obtains page credentials. The caller persists them.
    async fn connect(&self) -> Result<FacebookCredentials, PublishError>;

    async fn publish(
        &self,
        message: &str,
        credentials: &FacebookCredentials,
    ) -> Result<PublishResult, PublishError>;
}

// ────────────────────────────────────────────────────────────────────────────
// MockPublisher
// ────────────────────────────────────────────────────────────────────────────

/// Always succeeds. Post ids are derived from the message text, so the same
/// message always maps to the same id.
pub struct MockPublisher;

#[async_trait]
impl Publisher for MockPublisher {
    async fn connect(&self) -> Result<FacebookCredentials, PublishError> {
        Ok(FacebookCredentials::new(MOCK_PAGE_ID, MOCK_ACCESS_TOKEN))
    }

    async fn publish(
        &self,
        message: &str,
        credentials: &FacebookCredentials,
    ) -> Result<PublishResult, PublishError> {
        let mut hasher = DefaultHasher::new();
        message.hash(&mut hasher);
        let post_id = format!("mock_post_{}", hasher.finish() % 1_000_000);
        let post_link = format!(
            "https://facebook.com/{}/posts/{}",
            credentials.fb_page_id, post_id
        );
        info!("Mock-published post {post_id} to page {}", credentials.fb_page_id);
        Ok(PublishResult {
            success: true,
            post_id,
            post_link,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// GraphPublisher
// ────────────────────────────────────────────────────────────────────────────

/// Posts to `/{page-id}/feed` on the Graph API.
pub struct GraphPublisher {
    client: Client,
    credentials: FacebookCredentials,
}

#[derive(Debug, Deserialize)]
struct GraphPostResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct GraphErrorEnvelope {
    error: GraphErrorBody,
}

#[derive(Debug, Deserialize)]
struct GraphErrorBody {
    message: String,
}

impl GraphPublisher {
    pub fn new(client: Client, credentials: FacebookCredentials) -> Self {
        Self {
            client,
            credentials,
        }
    }
}

#[async_trait]
impl Publisher for GraphPublisher {
    async fn connect(&self) -> Result<FacebookCredentials, PublishError> {
        Ok(self.credentials.clone())
    }

    async fn publish(
        &self,
        message: &str,
        credentials: &FacebookCredentials,
    ) -> Result<PublishResult, PublishError> {
        let url = format!("{GRAPH_API_BASE}/{}/feed", credentials.fb_page_id);
        let response = self
            .client
            .post(&url)
            .form(&[
                ("message", message),
                ("access_token", credentials.access_token.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GraphErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(PublishError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let created: GraphPostResponse = response.json().await?;
        info!("Published post {} to page {}", created.id, credentials.fb_page_id);
        Ok(PublishResult {
            success: true,
            post_link: format!("https://facebook.com/{}", created.id),
            post_id: created.id,
        })
    }
}
