//! Startup wiring.
//!
//! Bundles the resolved configuration, the UI catalog, and the composite
//! provider into one value the hosting application builds exactly once and
//! shares by reference. Nothing here is refreshed after construction;
//! callers that need current environment state re-resolve through
//! [`ProviderConfig::from_env`] or [`crate::models::chat_models`].

use tracing::info;

use crate::config::ProviderConfig;
use crate::models::{chat_models_for, ModelDescriptor};
use crate::provider::{ModelFactory, ModelProvider, ProviderError};

/// Everything the hosting application needs to serve models.
pub struct ModelRuntime {
    /// The configuration the catalog and provider were built from.
    pub config: ProviderConfig,
    /// Selectable models for UI presentation.
    pub chat_models: Vec<ModelDescriptor>,
    /// Ready model handles, one per slot.
    pub provider: ModelProvider,
}

impl ModelRuntime {
    /// Resolve the environment once and materialize catalog and provider.
    pub fn init(factory: &dyn ModelFactory) -> Result<Self, ProviderError> {
        let config = ProviderConfig::from_env()?;
        let chat_models = chat_models_for(&config);
        let provider = ModelProvider::build(&config, factory)?;

        info!(provider = %config.provider, "model runtime initialized");
        Ok(Self {
            config,
            chat_models,
            provider,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Provider;
    use crate::models::ModelSlot;
    use crate::provider::MockModelFactory;
    use crate::testenv;
    use serdes_ai_models::Model;

    #[test]
    fn init_materializes_catalog_and_provider() {
        let _env = testenv::scoped();
        std::env::set_var("LLM_PROVIDER", "anthropic");
        std::env::set_var("LLM_CHAT_MODEL", "claude-sonnet-4-20250514");
        std::env::set_var("LLM_REASONING_MODEL", "claude-opus-4-20250514");
        std::env::set_var("LLM_CHAT_MODEL_NAME", "Claude");

        let runtime = ModelRuntime::init(&MockModelFactory).unwrap();
        assert_eq!(runtime.config.provider, Provider::Anthropic);
        assert_eq!(runtime.chat_models.len(), 2);
        assert_eq!(runtime.chat_models[0].name, "Claude");
        assert_eq!(
            runtime.provider.language_model(ModelSlot::Reasoning).name(),
            "anthropic:claude-opus-4-20250514"
        );
        assert!(runtime.provider.get("artifact-model").is_some());
    }

    #[test]
    fn init_fails_without_provider() {
        let _env = testenv::scoped();
        assert!(ModelRuntime::init(&MockModelFactory).is_err());
    }
}
