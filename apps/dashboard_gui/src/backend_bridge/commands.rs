//! Backend commands queued from UI to the request worker.

use workbench_client::protocol::{
    ContentBriefRequest, GenerateArticleRequest, KeywordResearchRequest,
};
use workbench_client::RequestSeq;

use crate::controller::events::ScreenId;

pub enum BackendCommand {
    ResearchKeywords {
        seq: RequestSeq,
        request: KeywordResearchRequest,
    },
    BuildBrief {
        seq: RequestSeq,
        request: ContentBriefRequest,
    },
    GenerateArticle {
        seq: RequestSeq,
        request: GenerateArticleRequest,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ResearchKeywords { .. } => "research_keywords",
            Self::BuildBrief { .. } => "build_brief",
            Self::GenerateArticle { .. } => "generate_article",
        }
    }

    pub fn screen(&self) -> ScreenId {
        match self {
            Self::ResearchKeywords { .. } => ScreenId::Research,
            Self::BuildBrief { .. } => ScreenId::Brief,
            Self::GenerateArticle { .. } => ScreenId::Generate,
        }
    }

    pub fn seq(&self) -> RequestSeq {
        match self {
            Self::ResearchKeywords { seq, .. }
            | Self::BuildBrief { seq, .. }
            | Self::GenerateArticle { seq, .. } => *seq,
        }
    }
}
