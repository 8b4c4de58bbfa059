pub mod health;
pub mod recommend;

use assessment_recommender::{
    client::RecommendationClient,
    config::AppConfig,
    scrape::{DescriptionScraper, ReqwestFetcher},
    session::Session,
};
use axum::{routing::{get, post}, Router};
use std::{path::Path, sync::Arc};
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState {
    pub client: RecommendationClient,
    pub scraper: DescriptionScraper,
    pub startup_warning: Option<&'static str>,
}

impl AppState {
    /// Every request starts from a fresh session; the missing-key warning is
    /// repeated on each page like any other notice.
    pub fn new_session(&self) -> Session {
        let mut session = Session::new();
        if let Some(message) = self.startup_warning {
            session.warning(message);
        }
        session
    }
}

pub fn build_router(state: AppState, web_dir: &Path) -> Router {
    Router::new()
        .route("/", get(recommend::home_page))
        .route("/recommend", post(recommend::submit_query))
        .route("/recommend/url", post(recommend::submit_url))
        .route("/health", get(health::health))
        .nest_service("/web", ServeDir::new(web_dir))
        .with_state(state)
}

pub fn default_state(config: &AppConfig) -> AppState {
    AppState {
        client: RecommendationClient::from_config(config),
        scraper: DescriptionScraper::new(Arc::new(ReqwestFetcher::new())),
        startup_warning: config.missing_key_warning(),
    }
}
