use crate::config::SCRAPE_TIMEOUT;
use scraper::{Html, Selector};
use std::{sync::Arc, time::Duration};
use thiserror::Error;
use tracing::{debug, warn};

pub const USER_AGENT: &str = "Mozilla/5.0";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrapeError {
    #[error("URL must not be empty")]
    EmptyUrl,

    #[error("Failed to fetch URL: {0}")]
    Status(u16),

    #[error("Error processing URL: {0}")]
    Request(String),
}

#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_html(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Pulls the readable text of a job posting out of its paragraphs.
#[derive(Clone)]
pub struct DescriptionScraper {
    fetcher: Arc<dyn PageFetcher>,
}

impl DescriptionScraper {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn scrape(&self, url: &str) -> Result<String, ScrapeError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ScrapeError::EmptyUrl);
        }

        let html = self.fetcher.fetch_html(url).await.map_err(|err| {
            warn!(%url, error = %err, "job description fetch failed");
            err
        })?;
        let text = extract_paragraph_text(&html);
        debug!(%url, chars = text.len(), "scraped job description");
        Ok(text)
    }
}

pub struct ReqwestFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self::with_timeout(SCRAPE_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|err| ScrapeError::Request(err.to_string()))?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(ScrapeError::Status(response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|err| ScrapeError::Request(err.to_string()))
    }
}

/// Trims the text of every `<p>` in document order and joins them with one space.
pub fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let selector = Selector::parse("p").expect("paragraph selector");

    document
        .select(&selector)
        .map(|paragraph| paragraph.text().collect::<String>().trim().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
