//! Bridge types for interoperability with the `llm` crate.

use async_trait::async_trait;
use llm::chain::LLMRegistry;
use llm::chat::ChatMessage;
use std::sync::Arc;

use super::error::GenerationError;
use crate::core::config::Role;

/// Something that turns a single prompt into a single text completion.
///
/// Stages hold their generators as `Arc<dyn TextGenerator>` so one configured
/// client serves every request, and tests can substitute doubles.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// A generator backed by the provider registered under a [`Role`].
#[derive(Clone)]
pub struct RegistryGenerator {
    registry: Arc<LLMRegistry>,
    role: Role,
}

impl RegistryGenerator {
    pub fn new(registry: Arc<LLMRegistry>, role: Role) -> Self {
        Self { registry, role }
    }
}

#[async_trait]
impl TextGenerator for RegistryGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let provider = self
            .registry
            .get(self.role.as_str())
            .ok_or_else(|| GenerationError::ProviderUnavailable(self.role.to_string()))?;

        let req = ChatMessage::user().content(prompt).build();
        let resp = provider.chat(&[req]).await?;

        match resp.text() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(GenerationError::EmptyCompletion(self.role.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unregistered_role_is_unavailable() {
        let generator = RegistryGenerator::new(Arc::new(LLMRegistry::new()), Role::Title);
        let err = generator.generate("anything").await.unwrap_err();
        assert!(matches!(err, GenerationError::ProviderUnavailable(ref role) if role == "title"));
    }
}
