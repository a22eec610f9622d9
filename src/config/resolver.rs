//! Environment-driven provider configuration.
//!
//! All LLM configuration is read from environment variables - no hardcoded
//! defaults. Each deployment configures its own provider and models.
//!
//! Required variables:
//! - `LLM_PROVIDER`: "openai" | "anthropic" | "google"
//! - `LLM_CHAT_MODEL`: model id for chat (e.g. "gpt-4o")
//! - `LLM_REASONING_MODEL`: model id for reasoning (e.g. "o1")
//!
//! Optional variables:
//! - `LLM_TITLE_MODEL`, `LLM_ARTIFACT_MODEL`: default to the chat model
//! - `LLM_CHAT_MODEL_NAME`, `LLM_REASONING_MODEL_NAME`: display names,
//!   default to the corresponding model id
//!
//! Every variable also has a `PUBLIC_`-prefixed alias consulted as a
//! fallback, for deployments that expose a client-side copy of the
//! configuration. Resolution is side-effect-free and uncached: each call
//! reflects the current process environment.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::provider::Provider;

/// Provider selection variable.
pub const LLM_PROVIDER: &str = "LLM_PROVIDER";
/// Chat model id variable (required).
pub const LLM_CHAT_MODEL: &str = "LLM_CHAT_MODEL";
/// Reasoning model id variable (required).
pub const LLM_REASONING_MODEL: &str = "LLM_REASONING_MODEL";
/// Title-generation model variable (optional).
pub const LLM_TITLE_MODEL: &str = "LLM_TITLE_MODEL";
/// Artifact-generation model variable (optional).
pub const LLM_ARTIFACT_MODEL: &str = "LLM_ARTIFACT_MODEL";
/// Chat model display name variable (optional).
pub const LLM_CHAT_MODEL_NAME: &str = "LLM_CHAT_MODEL_NAME";
/// Reasoning model display name variable (optional).
pub const LLM_REASONING_MODEL_NAME: &str = "LLM_REASONING_MODEL_NAME";

/// Prefix of the client-exposed alias of each variable.
pub const PUBLIC_PREFIX: &str = "PUBLIC_";

/// Errors from resolving the provider configuration.
///
/// All variants are fatal for the calling process: there is no retry and no
/// fallback provider. Each deployment must configure itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("LLM_PROVIDER is required. Set it to 'openai', 'anthropic', or 'google'.")]
    MissingOrInvalidProvider,
    #[error("LLM_CHAT_MODEL is required. Example: 'gpt-4o', 'claude-sonnet-4-5-20250514', 'gemini-2.5-flash'")]
    MissingChatModel,
    #[error("LLM_REASONING_MODEL is required. Example: 'o1', 'claude-sonnet-4-5-20250514', 'gemini-2.5-pro'")]
    MissingReasoningModel,
}

/// Fully resolved provider and model configuration.
///
/// Invariant: `chat_model` and `reasoning_model` are non-empty; construction
/// via [`ProviderConfig::from_env`] fails otherwise. Model ids are passed
/// through exactly as configured, without trimming or normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Active provider.
    pub provider: Provider,
    /// Model id used for the chat slot.
    pub chat_model: String,
    /// Display name for the chat model.
    pub chat_model_name: String,
    /// Model id used for the reasoning slot.
    pub reasoning_model: String,
    /// Display name for the reasoning model.
    pub reasoning_model_name: String,
    /// Model id used for title generation.
    pub title_model: String,
    /// Model id used for artifact generation.
    pub artifact_model: String,
}

/// Read a variable, treating empty values as unset.
fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// First non-empty value of the variable or its `PUBLIC_` alias.
fn env_any(name: &str) -> Option<String> {
    non_empty(name).or_else(|| non_empty(&format!("{PUBLIC_PREFIX}{name}")))
}

impl Provider {
    /// Resolve the active provider from the environment.
    pub fn from_env() -> Result<Provider, ConfigError> {
        let raw = env_any(LLM_PROVIDER).ok_or(ConfigError::MissingOrInvalidProvider)?;
        let provider = Provider::parse(&raw).ok_or(ConfigError::MissingOrInvalidProvider)?;
        debug!(provider = %provider, "resolved LLM provider");
        Ok(provider)
    }
}

impl ProviderConfig {
    /// Resolve the full configuration from the environment.
    pub fn from_env() -> Result<ProviderConfig, ConfigError> {
        let provider = Provider::from_env()?;

        let chat_model = env_any(LLM_CHAT_MODEL).ok_or(ConfigError::MissingChatModel)?;
        let reasoning_model =
            env_any(LLM_REASONING_MODEL).ok_or(ConfigError::MissingReasoningModel)?;

        // Optional models default to the chat model
        let title_model = env_any(LLM_TITLE_MODEL).unwrap_or_else(|| chat_model.clone());
        let artifact_model = env_any(LLM_ARTIFACT_MODEL).unwrap_or_else(|| chat_model.clone());

        // Display names default to the model id
        let chat_model_name = env_any(LLM_CHAT_MODEL_NAME).unwrap_or_else(|| chat_model.clone());
        let reasoning_model_name =
            env_any(LLM_REASONING_MODEL_NAME).unwrap_or_else(|| reasoning_model.clone());

        debug!(
            provider = %provider,
            chat_model = %chat_model,
            reasoning_model = %reasoning_model,
            "resolved provider configuration"
        );

        Ok(ProviderConfig {
            provider,
            chat_model,
            chat_model_name,
            reasoning_model,
            reasoning_model_name,
            title_model,
            artifact_model,
        })
    }
}

/// Check whether the configured provider's API key is present and non-empty.
///
/// The soft-failure counterpart of [`ProviderConfig::from_env`]: never
/// errors. An unresolvable provider or a missing/empty key yields `false`.
/// Intended for pre-flight capability checks.
pub fn has_required_api_key() -> bool {
    match Provider::from_env() {
        Ok(provider) => non_empty(provider.api_key_env()).is_some(),
        Err(_) => false,
    }
}
