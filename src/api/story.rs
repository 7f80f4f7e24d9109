//! The story stage: narrative generation followed by title generation.

use std::sync::Arc;
use tracing::{debug, info};

use super::error::GenerationError;
use super::llm_bridge::TextGenerator;
use super::prompts::{build_story_prompt, build_title_prompt};
use crate::core::text::{estimate_duration_minutes, strip_quotes, word_count};

/// A finished narrative with its title and derived metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryDraft {
    pub text: String,
    pub title: String,
    pub word_count: usize,
    pub estimated_duration_minutes: u64,
}

impl StoryDraft {
    pub fn new(text: String, title: String) -> Self {
        let words = word_count(&text);
        Self {
            text,
            title,
            word_count: words,
            estimated_duration_minutes: estimate_duration_minutes(words),
        }
    }
}

/// Uses two generators in sequence: one sized for long narratives, one for
/// short, more adventurous titles.
pub struct StoryStage {
    story: Arc<dyn TextGenerator>,
    title: Arc<dyn TextGenerator>,
}

impl StoryStage {
    pub fn new(story: Arc<dyn TextGenerator>, title: Arc<dyn TextGenerator>) -> Self {
        Self { story, title }
    }

    /// Writes the story, then titles it. Both calls must succeed; a failed
    /// title call discards the story.
    pub async fn generate(
        &self,
        research: &str,
        original_query: &str,
    ) -> Result<StoryDraft, GenerationError> {
        info!("Generating story from research");
        let text = self
            .story
            .generate(&build_story_prompt(research, original_query))
            .await?;
        debug!(chars = text.len(), "Story generated");

        let raw_title = self
            .title
            .generate(&build_title_prompt(&text, original_query))
            .await?;
        let title = strip_quotes(&raw_title);
        debug!(title = %title, "Title generated");

        Ok(StoryDraft::new(text, title))
    }
}
