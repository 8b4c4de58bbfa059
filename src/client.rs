use crate::config::{normalize_endpoint, AppConfig, HEALTH_TIMEOUT, RECOMMEND_TIMEOUT};
use crate::models::{Assessment, RecommendationRequest, RecommendationResponse};
use crate::session::Session;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API Error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Error connecting to API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Error connecting to API: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client for the remote recommendation service. One attempt per call,
/// no retries.
#[derive(Clone)]
pub struct RecommendationClient {
    client: reqwest::Client,
    base_url: String,
}

impl RecommendationClient {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: normalize_endpoint(base_url.as_ref()),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.api_endpoint)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, route: &str) -> String {
        format!("{}/{}", self.base_url, route.trim_start_matches('/'))
    }

    /// True only for an exact 200 from `/health` within the timeout.
    pub async fn check_health(&self) -> bool {
        let url = self.endpoint("health");
        debug!(%url, "checking backend health");

        match self.client.get(&url).timeout(HEALTH_TIMEOUT).send().await {
            Ok(response) if response.status() == StatusCode::OK => true,
            Ok(response) => {
                warn!(status = %response.status(), "backend health check failed");
                false
            }
            Err(err) => {
                warn!(error = %err, "backend health check unreachable");
                false
            }
        }
    }

    pub async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<Assessment>, ClientError> {
        let url = self.endpoint("recommend");
        debug!(%url, max_results = request.max_results, "requesting recommendations");

        let response = self
            .client
            .post(&url)
            .json(request)
            .timeout(RECOMMEND_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: RecommendationResponse = serde_json::from_str(&body)?;
        debug!(count = parsed.recommended_assessments.len(), "received recommendations");
        Ok(parsed.recommended_assessments)
    }

    /// Returns the backend's list verbatim, or an empty list after recording
    /// the failure as an error notice on the session.
    pub async fn get_recommendations(
        &self,
        session: &mut Session,
        query: &str,
        max_results: usize,
    ) -> Vec<Assessment> {
        let request = RecommendationRequest::new(query).with_max_results(max_results);
        match self.recommend(&request).await {
            Ok(assessments) => assessments,
            Err(err) => {
                warn!(error = %err, "recommendation request failed");
                session.error(err.to_string());
                Vec::new()
            }
        }
    }
}
