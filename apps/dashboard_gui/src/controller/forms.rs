//! Per-screen form state. Seeded with the same defaults the screens have
//! always shipped with; payloads are rebuilt fresh on every submit.

use workbench_client::protocol::{
    ContentBriefRequest, GenerateArticleRequest, KeywordResearchRequest,
    DEFAULT_TARGET_LENGTH_WORDS,
};

#[derive(Debug, Clone)]
pub struct ResearchForm {
    pub seeds: String,
}

impl Default for ResearchForm {
    fn default() -> Self {
        Self {
            seeds: "best hiking backpacks".to_string(),
        }
    }
}

impl ResearchForm {
    pub fn payload(&self) -> KeywordResearchRequest {
        KeywordResearchRequest::from_seed_field(&self.seeds)
    }
}

#[derive(Debug, Clone)]
pub struct BriefForm {
    pub seed: String,
    pub keywords: String,
}

impl Default for BriefForm {
    fn default() -> Self {
        Self {
            seed: "best hiking backpacks".to_string(),
            keywords: "hiking backpacks, ultralight backpack".to_string(),
        }
    }
}

impl BriefForm {
    pub fn payload(&self) -> ContentBriefRequest {
        ContentBriefRequest::from_fields(&self.seed, &self.keywords)
    }
}

#[derive(Debug, Clone)]
pub struct GenerateForm {
    pub topic: String,
    /// Free-text in the UI; coerced to a number at submit time.
    pub target_length_words: String,
}

impl Default for GenerateForm {
    fn default() -> Self {
        Self {
            topic: "best hiking backpacks".to_string(),
            target_length_words: DEFAULT_TARGET_LENGTH_WORDS.to_string(),
        }
    }
}

impl GenerateForm {
    pub fn payload(&self) -> GenerateArticleRequest {
        let target_length_words = self
            .target_length_words
            .trim()
            .parse::<u64>()
            .unwrap_or(DEFAULT_TARGET_LENGTH_WORDS);
        GenerateArticleRequest::new(&self.topic, target_length_words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn research_payload_from_default_seeds() {
        let form = ResearchForm::default();
        assert_eq!(
            serde_json::to_value(form.payload()).expect("serialize"),
            json!({"seeds": ["best hiking backpacks"], "max_keywords": 120})
        );
    }

    #[test]
    fn editing_one_field_leaves_others_untouched() {
        let mut form = BriefForm::default();
        form.keywords = "trail shoes".to_string();
        assert_eq!(form.seed, "best hiking backpacks");
        assert_eq!(form.payload().keywords, vec!["trail shoes"]);
    }

    #[test]
    fn generate_length_is_numeric_on_the_wire() {
        let form = GenerateForm {
            topic: "best hiking backpacks".to_string(),
            target_length_words: "1500".to_string(),
        };
        assert_eq!(
            serde_json::to_value(form.payload()).expect("serialize"),
            json!({"topic": "best hiking backpacks", "target_length_words": 1500})
        );
    }

    #[test]
    fn unparseable_length_falls_back_to_default() {
        let form = GenerateForm {
            topic: "t".to_string(),
            target_length_words: "a lot".to_string(),
        };
        assert_eq!(form.payload().target_length_words, 1500);
    }

    #[test]
    fn repeated_payload_builds_are_identical() {
        let form = ResearchForm::default();
        assert_eq!(form.payload(), form.payload());
    }
}
