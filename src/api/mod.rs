//! The research → story pipeline and its building blocks.

mod error;
mod llm_bridge;
mod pipeline;
pub mod prompts;
mod questions;
mod research;
mod story;
#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ConfigError, GenerationError, PipelineError};
pub use llm_bridge::{RegistryGenerator, TextGenerator};
pub use pipeline::{
    validate_query, validate_topic, Pipeline, StoryRecord, MIN_QUERY_CHARS, MIN_TOPIC_CHARS,
};
pub use questions::{ClarifyingQuestions, QuestionStage};
pub use research::{ResearchBrief, ResearchStage};
pub use story::{StoryDraft, StoryStage};
