use crate::client::RecommendationClient;
use serde::Serialize;

pub const BACKEND_UP_MESSAGE: &str = "Connected to backend API successfully!";
pub const BACKEND_DOWN_MESSAGE: &str =
    "The backend API is not responding. Please check the recommendation service deployment.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// State for one user interaction: what was submitted, what the backend
/// said about its health, and the messages to show inline on the page.
#[derive(Debug, Default)]
pub struct Session {
    pub query: String,
    pub job_url: String,
    pub scraped_description: Option<String>,
    backend_healthy: Option<bool>,
    notices: Vec<Notice>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices.push(Notice {
            level,
            message: message.into(),
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(NoticeLevel::Success, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.notify(NoticeLevel::Info, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.notify(NoticeLevel::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(NoticeLevel::Error, message);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.notices
            .iter()
            .filter(|notice| notice.level == NoticeLevel::Error)
            .map(|notice| notice.message.as_str())
    }

    pub fn backend_healthy(&self) -> Option<bool> {
        self.backend_healthy
    }

    /// Runs the health gate once; later calls reuse the recorded result.
    pub async fn ensure_backend(&mut self, client: &RecommendationClient) -> bool {
        if let Some(healthy) = self.backend_healthy {
            return healthy;
        }

        let healthy = client.check_health().await;
        self.record_health(healthy);
        healthy
    }

    pub fn record_health(&mut self, healthy: bool) {
        self.backend_healthy = Some(healthy);
        if healthy {
            self.success(BACKEND_UP_MESSAGE);
        } else {
            self.error(BACKEND_DOWN_MESSAGE);
        }
    }
}
