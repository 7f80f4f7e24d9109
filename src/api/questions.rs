//! Clarifying questions, a sibling flow to the research → story pipeline.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use super::error::GenerationError;
use super::llm_bridge::TextGenerator;
use super::prompts::build_clarifying_questions_prompt;
use crate::core::text::word_count;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClarifyingQuestions {
    /// Conversational acknowledgment followed by five numbered questions.
    pub questions: String,
    pub word_count: usize,
}

pub struct QuestionStage {
    generator: Arc<dyn TextGenerator>,
}

impl QuestionStage {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn generate(
        &self,
        initial_topic: &str,
    ) -> Result<ClarifyingQuestions, GenerationError> {
        info!(topic = initial_topic, "Generating clarifying questions");
        let questions = self
            .generator
            .generate(&build_clarifying_questions_prompt(initial_topic))
            .await?;
        debug!(chars = questions.len(), "Questions generated");
        Ok(ClarifyingQuestions {
            word_count: word_count(&questions),
            questions,
        })
    }
}
