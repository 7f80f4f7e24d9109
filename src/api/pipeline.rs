//! Fail-fast composition of the research and story stages.

use chrono::{DateTime, Utc};
use llm::chain::LLMRegistry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use super::error::{ConfigError, PipelineError};
use super::llm_bridge::{RegistryGenerator, TextGenerator};
use super::questions::{ClarifyingQuestions, QuestionStage};
use super::research::{ResearchBrief, ResearchStage};
use super::story::{StoryDraft, StoryStage};
use crate::core::config::{load_llm_registry, Config, Role};
use crate::core::utils::record_id;

/// Minimum trimmed length of a story query, in characters.
pub const MIN_QUERY_CHARS: usize = 10;
/// Minimum trimmed length of a clarifying-question topic, in characters.
pub const MIN_TOPIC_CHARS: usize = 20;

/// The final result handed back to callers. Nothing keeps it after that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryRecord {
    pub id: String,
    pub query: String,
    pub title: String,
    pub story: String,
    pub research: String,
    pub created_at: DateTime<Utc>,
    pub word_count: usize,
    #[serde(rename = "estimated_duration")]
    pub estimated_duration_minutes: u64,
    /// Audio synthesis is not implemented; always `None` ("not yet available").
    pub audio_url: Option<String>,
}

impl StoryRecord {
    pub fn assemble(
        query: &str,
        research: ResearchBrief,
        draft: StoryDraft,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: record_id(now),
            query: query.to_string(),
            title: draft.title,
            story: draft.text,
            research: research.text,
            created_at: now,
            word_count: draft.word_count,
            estimated_duration_minutes: draft.estimated_duration_minutes,
            audio_url: None,
        }
    }
}

pub fn validate_query(query: &str) -> Result<(), PipelineError> {
    if query.trim().chars().count() < MIN_QUERY_CHARS {
        return Err(PipelineError::InvalidInput(format!(
            "Please provide a more detailed question (at least {} characters)",
            MIN_QUERY_CHARS
        )));
    }
    Ok(())
}

pub fn validate_topic(topic: &str) -> Result<(), PipelineError> {
    if topic.trim().chars().count() < MIN_TOPIC_CHARS {
        return Err(PipelineError::InvalidInput(format!(
            "Please provide a more detailed topic (at least {} characters)",
            MIN_TOPIC_CHARS
        )));
    }
    Ok(())
}

/// Owns one instance of each stage and is shared read-only across requests.
pub struct Pipeline {
    research: ResearchStage,
    story: StoryStage,
    questions: QuestionStage,
}

impl Pipeline {
    pub fn new(research: ResearchStage, story: StoryStage, questions: QuestionStage) -> Self {
        Self {
            research,
            story,
            questions,
        }
    }

    /// Wires every stage to the provider registered under its role.
    pub fn from_registry(registry: Arc<LLMRegistry>) -> Self {
        let generator = |role: Role| -> Arc<dyn TextGenerator> {
            Arc::new(RegistryGenerator::new(Arc::clone(&registry), role))
        };
        Self::new(
            ResearchStage::new(generator(Role::Research)),
            StoryStage::new(generator(Role::Story), generator(Role::Title)),
            QuestionStage::new(generator(Role::Questions)),
        )
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let registry = load_llm_registry(config)?;
        Ok(Self::from_registry(Arc::new(registry)))
    }

    /// Validates `query`, researches it, then writes and titles the story.
    ///
    /// The first failure ends the run; the story stage is never reached when
    /// research fails.
    pub async fn run(&self, query: &str) -> Result<StoryRecord, PipelineError> {
        validate_query(query)?;

        info!("Phase 1: research");
        let research = self.research.conduct(query).await.map_err(|e| {
            error!(error = %e, "Research stage failed");
            PipelineError::Research(e)
        })?;

        info!("Phase 2: story");
        let draft = self
            .story
            .generate(&research.text, query)
            .await
            .map_err(|e| {
                error!(error = %e, "Story stage failed");
                PipelineError::Story(e)
            })?;

        let record = StoryRecord::assemble(query, research, draft, Utc::now());
        info!(id = %record.id, words = record.word_count, "Story generation completed");
        Ok(record)
    }

    /// Validates `topic` and asks for clarifying questions about it.
    pub async fn clarify(&self, topic: &str) -> Result<ClarifyingQuestions, PipelineError> {
        validate_topic(topic)?;
        self.questions.generate(topic).await.map_err(|e| {
            error!(error = %e, "Question generation failed");
            PipelineError::Questions(e)
        })
    }
}
