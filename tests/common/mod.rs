#![allow(dead_code)]

use async_trait::async_trait;
use llm::error::LLMError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use storycast::api::{QuestionStage, ResearchStage, StoryStage, TextGenerator};
use storycast::{GenerationError, Pipeline};

/// Always gives the same answer and counts how often it was asked.
pub struct FixedGenerator {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl FixedGenerator {
    pub fn ok(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn err(reason: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(reason.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for FixedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(reason) => Err(LLMError::ProviderError(reason.clone()).into()),
        }
    }
}

pub struct Harness {
    pub research: Arc<FixedGenerator>,
    pub story: Arc<FixedGenerator>,
    pub title: Arc<FixedGenerator>,
    pub questions: Arc<FixedGenerator>,
}

impl Harness {
    pub fn new(
        research: Arc<FixedGenerator>,
        story: Arc<FixedGenerator>,
        title: Arc<FixedGenerator>,
        questions: Arc<FixedGenerator>,
    ) -> Self {
        Self {
            research,
            story,
            title,
            questions,
        }
    }

    pub fn all_ok() -> Self {
        Self::new(
            FixedGenerator::ok("1. Fact one. 2. Fact two."),
            FixedGenerator::ok("Imagine a story."),
            FixedGenerator::ok("\"A Title\""),
            FixedGenerator::ok("Great! 1. Which part?"),
        )
    }

    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(
            ResearchStage::new(self.research.clone()),
            StoryStage::new(self.story.clone(), self.title.clone()),
            QuestionStage::new(self.questions.clone()),
        )
    }

    pub fn total_calls(&self) -> usize {
        self.research.calls() + self.story.calls() + self.title.calls() + self.questions.calls()
    }
}

pub fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
}
