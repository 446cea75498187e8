use std::sync::{Arc, Mutex};

use reqwest::Client;

use crate::facebook::credentials::CredentialStore;
use crate::facebook::publisher::Publisher;
use crate::llm_client::CompletionService;
use crate::planner::store::ScheduleStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Plain HTTP client for website and RSS fetches.
    pub http: Client,
    pub llm: Arc<dyn CompletionService>,
    /// Single writer of the schedule file. The mutex serializes mutations
    /// from concurrent requests.
    pub schedule: Arc<Mutex<ScheduleStore>>,
    pub credentials: Arc<CredentialStore>,
    /// Pluggable publisher. Default: MockPublisher. Swap via PUBLISHER env.
    pub publisher: Arc<dyn Publisher>,
}
