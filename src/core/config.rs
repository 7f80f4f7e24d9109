//! Manages the loading of LLM provider configurations.

use crate::api::ConfigError;
use llm::builder::{LLMBackend, LLMBuilder};
use llm::chain::LLMRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

/// The generation slots a provider can be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Research,
    Story,
    Title,
    Questions,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Research, Role::Story, Role::Title, Role::Questions];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Research => "research",
            Role::Story => "story",
            Role::Title => "title",
            Role::Questions => "questions",
        }
    }

    /// Built-in provider settings used when the config file has no entry for this role.
    pub fn default_provider(self) -> ProviderConfig {
        let (backend, model, max_tokens, temperature) = match self {
            Role::Research => ("anthropic", "claude-3-5-sonnet-20241022", 4000, 0.7),
            Role::Story => ("openai", "gpt-4o", 4000, 0.8),
            Role::Title => ("openai", "gpt-4o", 100, 0.9),
            Role::Questions => ("openai", "gpt-4o", 800, 0.8),
        };
        ProviderConfig {
            backend: backend.to_string(),
            model: model.to_string(),
            api_key_env: None,
            base_url: None,
            max_tokens: Some(max_tokens),
            temperature: Some(temperature),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub providers: BTreeMap<String, ProviderConfig>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub backend: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl Config {
    /// Reads `path`; a missing file yields the built-in defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// A config with every role spelled out, suitable for writing as a template.
    pub fn with_defaults() -> Self {
        let providers = Role::ALL
            .iter()
            .map(|role| (role.as_str().to_string(), role.default_provider()))
            .collect();
        Self {
            server: ServerConfig::default(),
            providers,
        }
    }

    /// The settings for `role`, falling back to the built-in defaults.
    pub fn provider(&self, role: Role) -> ProviderConfig {
        self.providers
            .get(role.as_str())
            .cloned()
            .unwrap_or_else(|| role.default_provider())
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// The environment variable conventionally holding the key for `backend`.
fn default_api_key_env(backend: &LLMBackend) -> Option<&'static str> {
    match backend {
        LLMBackend::OpenAI => Some("OPENAI_API_KEY"),
        LLMBackend::Anthropic => Some("ANTHROPIC_API_KEY"),
        LLMBackend::Google => Some("GOOGLE_API_KEY"),
        LLMBackend::Groq => Some("GROQ_API_KEY"),
        LLMBackend::XAI => Some("XAI_API_KEY"),
        LLMBackend::Cohere => Some("COHERE_API_KEY"),
        LLMBackend::DeepSeek => Some("DEEPSEEK_API_KEY"),
        LLMBackend::Mistral => Some("MISTRAL_API_KEY"),
        _ => None,
    }
}

/// Builds one provider per [`Role`] into an `LLMRegistry`, keyed by role name.
///
/// A role whose API key variable is unset is left out of the registry with a
/// warning; generation calls for it then fail instead of the whole service.
pub fn load_llm_registry(config: &Config) -> Result<LLMRegistry, ConfigError> {
    let mut registry = LLMRegistry::new();

    for role in Role::ALL {
        let provider_conf = config.provider(role);
        let backend = LLMBackend::from_str(&provider_conf.backend).map_err(|_| {
            ConfigError::InvalidBackend {
                backend: provider_conf.backend.clone(),
                role: role.to_string(),
            }
        })?;

        let api_key_env_var = provider_conf
            .api_key_env
            .clone()
            .or_else(|| default_api_key_env(&backend).map(str::to_string));

        let api_key = match api_key_env_var {
            Some(var) => match env::var(&var) {
                Ok(key) if !key.is_empty() => Some(key),
                _ => {
                    warn!(role = %role, env = %var, "API key not set, provider disabled");
                    continue;
                }
            },
            // Some backends like Ollama don't require a key
            None => None,
        };

        let mut builder = LLMBuilder::new()
            .backend(backend)
            .model(&provider_conf.model);

        if let Some(key) = api_key {
            builder = builder.api_key(key);
        }
        if let Some(base_url) = provider_conf.base_url {
            builder = builder.base_url(base_url);
        }
        if let Some(max_tokens) = provider_conf.max_tokens {
            builder = builder.max_tokens(max_tokens);
        }
        if let Some(temperature) = provider_conf.temperature {
            builder = builder.temperature(temperature as f32);
        }

        let provider = builder.build().map_err(|e| ConfigError::Provider {
            role: role.to_string(),
            reason: e.to_string(),
        })?;
        debug!(role = %role, model = %provider_conf.model, "Registered provider");
        registry.insert(role.as_str(), provider);
    }

    Ok(registry)
}
