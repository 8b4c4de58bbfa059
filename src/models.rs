use crate::config::DEFAULT_MAX_RESULTS;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRequest {
    pub query: String,
    pub max_results: usize,
}

impl RecommendationRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommended_assessments: Vec<Assessment>,
}

/// One recommended assessment exactly as the backend sent it. The item shape
/// is not validated; the accessors below turn whatever is there into text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct Assessment {
    raw: Value,
}

impl Assessment {
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn into_raw(self) -> Value {
        self.raw
    }

    fn field(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    pub fn description(&self) -> String {
        self.field("description").and_then(display_value).unwrap_or_default()
    }

    pub fn url(&self) -> String {
        self.field("url").and_then(display_value).unwrap_or_default()
    }

    /// Test types joined with ", "; a bare string is used as is.
    pub fn test_types(&self) -> String {
        self.field("test_type").and_then(display_value).unwrap_or_default()
    }

    pub fn remote_support(&self) -> Option<String> {
        self.field("remote_support").and_then(display_value)
    }

    pub fn adaptive_support(&self) -> Option<String> {
        self.field("adaptive_support").and_then(display_value)
    }

    pub fn duration(&self) -> Option<String> {
        self.field("duration").and_then(display_value)
    }
}

impl From<Value> for Assessment {
    fn from(raw: Value) -> Self {
        Self { raw }
    }
}

/// Text for a JSON value as shown on a card. Booleans read Yes/No, arrays
/// are joined with ", " and null counts as absent.
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(true) => Some("Yes".to_string()),
        Value::Bool(false) => Some("No".to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(display_value)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}
