mod config;
mod content;
mod errors;
mod extract;
mod facebook;
mod llm_client;
mod news;
mod planner;
mod profile;
mod routes;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, PublisherKind};
use crate::facebook::credentials::{CredentialStore, FacebookCredentials};
use crate::facebook::publisher::{GraphPublisher, MockPublisher, Publisher};
use crate::llm_client::LlmClient;
use crate::planner::store::ScheduleStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Postcraft API v{}", env!("CARGO_PKG_VERSION"));

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(120))
        .build()?;

    // Initialize LLM client
    let llm = LlmClient::new(http.clone(), config.groq_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Weekly schedule (loaded from disk if present)
    let schedule = ScheduleStore::open(config.schedule_file.clone())?;
    info!("Schedule store initialized at {}", schedule.path().display());

    let credentials = CredentialStore::open(config.fb_credentials_file.clone())?;

    // Publisher (MockPublisher by default; swap via PUBLISHER=graph)
    let publisher: Arc<dyn Publisher> = match config.publisher {
        PublisherKind::Mock => Arc::new(MockPublisher),
        PublisherKind::Graph => {
            let page_id = config.fb_page_id.clone().unwrap_or_default();
            let token = config.fb_access_token.clone().unwrap_or_default();
            Arc::new(GraphPublisher::new(
                http.clone(),
                FacebookCredentials::new(page_id, token),
            ))
        }
    };
    info!("Publisher: {:?}", config.publisher);

    // Build app state
    let state = AppState {
        http,
        llm: Arc::new(llm),
        schedule: Arc::new(Mutex::new(schedule)),
        credentials: Arc::new(credentials),
        publisher,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
