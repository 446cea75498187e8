pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::content::handlers as content;
use crate::facebook::handlers as facebook;
use crate::news::handlers as news;
use crate::planner::handlers as planner;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Business profile
        .route("/api/business/profile", post(profile::handle_generate_profile))
        // News
        .route("/api/news/industry-news", post(news::handle_industry_news))
        // Content
        .route(
            "/api/content/generate-posts",
            post(content::handle_generate_posts),
        )
        // Weekly planner (served with and without the trailing slash)
        .route(
            "/api/weekly-planner",
            post(planner::handle_generate_schedule).get(planner::handle_get_schedule),
        )
        .route(
            "/api/weekly-planner/",
            post(planner::handle_generate_schedule).get(planner::handle_get_schedule),
        )
        .route(
            "/api/weekly-planner/reset",
            delete(planner::handle_reset_schedule),
        )
        .route(
            "/api/weekly-planner/:day",
            put(planner::handle_update_post).delete(planner::handle_delete_post),
        )
        // Facebook
        .route(
            "/api/facebook/connect",
            get(facebook::handle_connect).post(facebook::handle_connect),
        )
        .route(
            "/api/facebook/publish",
            get(facebook::handle_publish_query).post(facebook::handle_publish_body),
        )
        .with_state(state)
}
