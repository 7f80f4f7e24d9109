//! Generator doubles shared by the unit tests.

use async_trait::async_trait;
use llm::error::LLMError;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::error::GenerationError;
use super::llm_bridge::TextGenerator;

/// Replays queued replies in order and records every prompt it receives.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new(replies: impl IntoIterator<Item = Result<String, String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new([Ok(text.to_string())])
    }

    pub fn failing(reason: &str) -> Self {
        Self::new([Err(reason.to_string())])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(reason)) => Err(LLMError::ProviderError(reason).into()),
            None => Err(GenerationError::EmptyCompletion("scripted".to_string())),
        }
    }
}
