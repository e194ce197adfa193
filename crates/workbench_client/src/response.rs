//! Tagged response model so rendering stays exhaustive instead of poking an
//! untyped JSON blob.

use serde_json::Value;

use crate::protocol::GeneratedArticle;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Whole response body, displayed verbatim (research and brief screens).
    RawJson(Value),
    /// Structured article with title and markdown body (generate screen).
    Article(GeneratedArticle),
}

impl ApiResponse {
    /// Decodes a generate-endpoint body. Falls back to raw JSON when the
    /// expected fields are absent, so remote error documents still display.
    pub fn article_from_value(value: Value) -> Self {
        match serde_json::from_value::<GeneratedArticle>(value.clone()) {
            Ok(article) => Self::Article(article),
            Err(_) => Self::RawJson(value),
        }
    }

    pub fn as_raw_json(&self) -> Option<&Value> {
        match self {
            Self::RawJson(value) => Some(value),
            Self::Article(_) => None,
        }
    }
}
