use assessment_recommender::config::DEFAULT_MAX_RESULTS;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct QueryForm {
    #[serde(default)]
    pub query: String,
    pub max_results: Option<String>,
}

#[derive(Deserialize)]
pub struct UrlForm {
    #[serde(default)]
    pub url: String,
    pub max_results: Option<String>,
}

/// Blank, unparsable or zero limits fall back to the default.
pub fn parse_max_results(value: Option<&str>) -> usize {
    value
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_MAX_RESULTS)
}
