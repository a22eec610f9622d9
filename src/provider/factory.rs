//! Model creation.
//!
//! The [`ModelFactory`] trait is the seam between provider selection and the
//! serdesAI model clients. Hosts pass a factory into composite construction,
//! which keeps test substitution out of the production path (see
//! [`crate::provider::mock`]).

use std::sync::Arc;

use serdes_ai_models::{
    anthropic::AnthropicModel, google::GoogleModel, openai::OpenAIChatModel, Model,
};
use thiserror::Error;
use tracing::debug;

use crate::config::{ConfigError, Provider};

/// Errors from building provider-backed model handles.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{key} is not set; the {provider} provider requires it")]
    MissingApiKey {
        provider: Provider,
        key: &'static str,
    },
}

/// Creates a concrete model client for a (provider, model id) pair.
pub trait ModelFactory: Send + Sync {
    /// Create a ready-to-use model handle.
    fn create(&self, provider: Provider, model_id: &str)
        -> Result<Arc<dyn Model>, ProviderError>;
}

/// Factory backed by the serdesAI provider clients.
///
/// The SDK constructors take the API key explicitly, so creation fails with
/// [`ProviderError::MissingApiKey`] when the provider's key variable is
/// absent or empty. No network traffic happens at construction time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SdkModelFactory;

impl SdkModelFactory {
    /// Create the production factory.
    pub fn new() -> Self {
        Self
    }
}

fn require_api_key(provider: Provider) -> Result<String, ProviderError> {
    let key = provider.api_key_env();
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ProviderError::MissingApiKey { provider, key }),
    }
}

impl ModelFactory for SdkModelFactory {
    fn create(
        &self,
        provider: Provider,
        model_id: &str,
    ) -> Result<Arc<dyn Model>, ProviderError> {
        let api_key = require_api_key(provider)?;
        debug!(provider = %provider, model_id = %model_id, "creating model client");

        let model: Arc<dyn Model> = match provider {
            Provider::Openai => Arc::new(OpenAIChatModel::new(model_id, api_key)),
            Provider::Anthropic => Arc::new(AnthropicModel::new(model_id, api_key)),
            Provider::Google => Arc::new(GoogleModel::new(model_id, api_key)),
        };
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testenv;

    #[test]
    fn missing_key_is_reported_per_provider() {
        let _env = testenv::scoped();
        let err = SdkModelFactory::new()
            .create(Provider::Openai, "gpt-4o")
            .unwrap_err();
        assert_eq!(
            err,
            ProviderError::MissingApiKey {
                provider: Provider::Openai,
                key: "OPENAI_API_KEY",
            }
        );
    }

    #[test]
    fn empty_key_is_treated_as_missing() {
        let _env = testenv::scoped();
        std::env::set_var("GOOGLE_API_KEY", "");
        assert!(SdkModelFactory::new()
            .create(Provider::Google, "gemini-2.5-flash")
            .is_err());
    }

    #[tokio::test]
    async fn creates_clients_when_key_present() {
        let _env = testenv::scoped();
        std::env::set_var("OPENAI_API_KEY", "sk-test");
        std::env::set_var("ANTHROPIC_API_KEY", "sk-ant-test");
        std::env::set_var("GOOGLE_API_KEY", "test-key");

        let factory = SdkModelFactory::new();
        assert!(factory.create(Provider::Openai, "gpt-4o").is_ok());
        assert!(factory
            .create(Provider::Anthropic, "claude-sonnet-4-20250514")
            .is_ok());
        assert!(factory.create(Provider::Google, "gemini-2.5-pro").is_ok());
    }
}
