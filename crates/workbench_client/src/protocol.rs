//! Wire payloads for the SEO workbench API and the form-to-payload transforms.

use serde::{Deserialize, Serialize};

/// Upper bound attached to every keyword research request.
pub const MAX_KEYWORDS: u32 = 120;

/// Default article length used when the length field cannot be parsed.
pub const DEFAULT_TARGET_LENGTH_WORDS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordResearchRequest {
    pub seeds: Vec<String>,
    pub max_keywords: u32,
}

impl KeywordResearchRequest {
    /// Builds the payload from the raw comma-separated seed field.
    pub fn from_seed_field(seeds: &str) -> Self {
        Self {
            seeds: split_comma_terms(seeds),
            max_keywords: MAX_KEYWORDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentBriefRequest {
    pub seed: String,
    pub keywords: Vec<String>,
}

impl ContentBriefRequest {
    /// Seed passes through verbatim; keywords come from a comma-separated field.
    pub fn from_fields(seed: &str, keywords: &str) -> Self {
        Self {
            seed: seed.to_string(),
            keywords: split_comma_terms(keywords),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateArticleRequest {
    pub topic: String,
    pub target_length_words: u64,
}

impl GenerateArticleRequest {
    pub fn new(topic: &str, target_length_words: u64) -> Self {
        Self {
            topic: topic.to_string(),
            target_length_words,
        }
    }
}

/// Structured response consumed by the article screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArticle {
    pub title: String,
    pub article_markdown: String,
}

/// Splits a comma-separated field into trimmed, non-empty terms.
pub fn split_comma_terms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}
