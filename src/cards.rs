use crate::models::Assessment;
use serde::Serialize;

/// Display-ready fields for one recommendation, in backend order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssessmentCard {
    pub rank: usize,
    pub title: String,
    pub url: String,
    pub test_types: String,
    pub rationale: String,
    pub remote_support: String,
    pub adaptive_support: String,
    pub duration: String,
}

/// Splits on the first `.`: the head is the title, everything after it is
/// the rationale, kept verbatim including the leading space.
pub fn split_description(description: &str) -> (&str, &str) {
    match description.split_once('.') {
        Some((title, rationale)) => (title, rationale),
        None => (description, ""),
    }
}

pub fn build_card(rank: usize, assessment: &Assessment) -> AssessmentCard {
    let description = assessment.description();
    let (title, rationale) = split_description(&description);
    AssessmentCard {
        rank,
        title: title.to_string(),
        url: safe_link(&assessment.url()),
        test_types: assessment.test_types(),
        rationale: rationale.to_string(),
        remote_support: assessment.remote_support().unwrap_or_else(not_available),
        adaptive_support: assessment.adaptive_support().unwrap_or_else(not_available),
        duration: assessment.duration().unwrap_or_else(not_available),
    }
}

/// Only http(s) links are rendered; anything else leaves the title unlinked.
pub fn safe_link(url: &str) -> String {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        String::new()
    }
}

/// Ranks are 1-based and follow the received order; nothing is filtered.
pub fn build_cards(assessments: &[Assessment]) -> Vec<AssessmentCard> {
    assessments
        .iter()
        .enumerate()
        .map(|(index, assessment)| build_card(index + 1, assessment))
        .collect()
}

fn not_available() -> String {
    "n/a".to_string()
}
