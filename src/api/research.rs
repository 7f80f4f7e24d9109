//! The research stage: one provider call producing the research brief.

use std::sync::Arc;
use tracing::{debug, info};

use super::error::GenerationError;
use super::llm_bridge::TextGenerator;
use super::prompts::build_research_prompt;
use crate::core::text::{count_numbered_points, word_count};

/// Plain-text research brief plus the metrics derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchBrief {
    pub text: String,
    /// Count of `\d+\.` markers, a rough proxy for numbered findings.
    pub derived_insight_count: usize,
    pub word_count: usize,
}

impl ResearchBrief {
    pub fn from_text(text: String) -> Self {
        Self {
            derived_insight_count: count_numbered_points(&text),
            word_count: word_count(&text),
            text,
        }
    }
}

pub struct ResearchStage {
    generator: Arc<dyn TextGenerator>,
}

impl ResearchStage {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Researches `query` with a single provider call. Never retries.
    ///
    /// The caller is expected to have validated `query` already.
    pub async fn conduct(&self, query: &str) -> Result<ResearchBrief, GenerationError> {
        info!(query, "Starting research");
        let text = self.generator.generate(&build_research_prompt(query)).await?;
        let brief = ResearchBrief::from_text(text);
        debug!(
            chars = brief.text.len(),
            words = brief.word_count,
            insights = brief.derived_insight_count,
            "Research completed"
        );
        Ok(brief)
    }
}
