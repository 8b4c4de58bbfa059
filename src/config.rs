use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_ENDPOINT: &str = "https://recommendation-system-e7gs.onrender.com";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8501";
pub const DEFAULT_MAX_RESULTS: usize = 10;

pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(10);
pub const RECOMMEND_TIMEOUT: Duration = Duration::from_secs(60);
pub const SCRAPE_TIMEOUT: Duration = Duration::from_secs(30);

pub const MISSING_KEY_WARNING: &str = "OPENROUTER_API_KEY not found in environment variables.";

/// Runtime settings for the page server, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_endpoint: String,
    pub bind_addr: String,
    pub web_dir: PathBuf,
    pub openrouter_api_key: Option<String>,
    pub rust_log: String,
}

impl AppConfig {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_endpoint = lookup("RECOMMENDER_API_ENDPOINT")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());
        let api_endpoint = normalize_endpoint(&api_endpoint);
        if !api_endpoint.starts_with("http://") && !api_endpoint.starts_with("https://") {
            anyhow::bail!("RECOMMENDER_API_ENDPOINT must be an http(s) URL, got '{api_endpoint}'");
        }

        let bind_addr = lookup("RECOMMENDER_BIND")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        bind_addr
            .parse::<std::net::SocketAddr>()
            .with_context(|| format!("RECOMMENDER_BIND must be a socket address, got '{bind_addr}'"))?;

        let web_dir = lookup("RECOMMENDER_WEB_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("web"));

        Ok(Self {
            api_endpoint,
            bind_addr,
            web_dir,
            openrouter_api_key: lookup("OPENROUTER_API_KEY").filter(|value| !value.trim().is_empty()),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn missing_key_warning(&self) -> Option<&'static str> {
        if self.openrouter_api_key.is_none() {
            Some(MISSING_KEY_WARNING)
        } else {
            None
        }
    }
}

pub fn normalize_endpoint(endpoint: &str) -> String {
    endpoint.trim().trim_end_matches('/').to_string()
}
