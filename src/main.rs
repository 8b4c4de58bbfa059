mod forms;
mod routes;
mod views;

use anyhow::{Context, Result};
use assessment_recommender::config::AppConfig;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .init();

    if let Some(message) = config.missing_key_warning() {
        warn!("{message}");
    }

    let state = routes::default_state(&config);
    let app = routes::build_router(state, &config.web_dir).layer(TraceLayer::new_for_http());

    let addr = config
        .bind_addr
        .parse::<std::net::SocketAddr>()
        .with_context(|| format!("invalid bind address {}", config.bind_addr))?;
    info!(backend = %config.api_endpoint, "assessment recommender listening on http://{addr}");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .context("server failed")?;

    Ok(())
}
