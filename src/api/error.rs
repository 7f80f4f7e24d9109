//! Error types for the library API.

use llm::error::LLMError;
use thiserror::Error;

/// Errors raised while loading configuration or building providers.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A provider names a backend the `llm` crate does not know.
    #[error("Invalid backend '{backend}' for provider '{role}'")]
    InvalidBackend { backend: String, role: String },

    /// The `llm` builder rejected a provider definition.
    #[error("Failed to build provider '{role}': {reason}")]
    Provider { role: String, reason: String },
}

/// Errors from a single call to a text-generation provider.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// An error originating from the underlying LLM backend.
    #[error("LLM backend error: {0}")]
    LLM(#[from] LLMError),

    /// The provider answered but returned no text.
    #[error("Provider '{0}' returned an empty completion")]
    EmptyCompletion(String),

    /// No provider is registered for the role, usually because its API key is unset.
    #[error("No provider available for '{0}' (is its API key set?)")]
    ProviderUnavailable(String),
}

/// Terminal errors of the research → story pipeline and the question flow.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The query or topic was rejected before any provider call.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Research failed: {0}")]
    Research(#[source] GenerationError),

    #[error("Story generation failed: {0}")]
    Story(#[source] GenerationError),

    #[error("Question generation failed: {0}")]
    Questions(#[source] GenerationError),
}

impl PipelineError {
    /// True when the caller sent bad input rather than a provider failing.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PipelineError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_errors_are_prefixed() {
        let err = PipelineError::Research(GenerationError::ProviderUnavailable(
            "research".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Research failed: No provider available for 'research' (is its API key set?)"
        );

        let err = PipelineError::Story(GenerationError::EmptyCompletion("title".to_string()));
        assert_eq!(
            err.to_string(),
            "Story generation failed: Provider 'title' returned an empty completion"
        );
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_invalid_input_is_shown_verbatim() {
        let err = PipelineError::InvalidInput("too short".to_string());
        assert_eq!(err.to_string(), "too short");
        assert!(err.is_invalid_input());
    }
}
