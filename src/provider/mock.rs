//! Deterministic model stand-ins.
//!
//! [`MockModelFactory`] satisfies the factory seam without touching the
//! environment or any provider SDK. Hosting applications inject it in tests
//! and offline runs in place of [`super::SdkModelFactory`].

use std::sync::Arc;

use async_trait::async_trait;
use serdes_ai_core::{ModelRequest, ModelResponse, ModelSettings};
use serdes_ai_models::{
    Model, ModelError, ModelProfile, ModelRequestParameters, StreamedResponse,
};

use crate::config::Provider;
use crate::models::ModelSlot;

use super::composite::ModelProvider;
use super::factory::{ModelFactory, ProviderError};

/// A model that never reaches the network and answers with defaults.
pub struct MockModel {
    name: String,
    system: String,
    profile: ModelProfile,
}

impl MockModel {
    /// Create a mock with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            system: "mock".to_string(),
            profile: ModelProfile::default(),
        }
    }
}

#[async_trait]
impl Model for MockModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn system(&self) -> &str {
        &self.system
    }

    fn identifier(&self) -> String {
        format!("mock/{}", self.name)
    }

    async fn request(
        &self,
        _messages: &[ModelRequest],
        _settings: &ModelSettings,
        _params: &ModelRequestParameters,
    ) -> Result<ModelResponse, ModelError> {
        Ok(ModelResponse::default())
    }

    async fn request_stream(
        &self,
        _messages: &[ModelRequest],
        _settings: &ModelSettings,
        _params: &ModelRequestParameters,
    ) -> Result<StreamedResponse, ModelError> {
        unimplemented!("mock models do not stream")
    }

    fn profile(&self) -> &ModelProfile {
        &self.profile
    }

    async fn count_tokens(&self, _messages: &[ModelRequest]) -> Result<u64, ModelError> {
        Ok(0)
    }
}

/// Factory producing [`MockModel`]s, named `"provider:model_id"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockModelFactory;

impl ModelFactory for MockModelFactory {
    fn create(
        &self,
        provider: Provider,
        model_id: &str,
    ) -> Result<Arc<dyn Model>, ProviderError> {
        Ok(Arc::new(MockModel::new(format!("{provider}:{model_id}"))))
    }
}

/// A composite provider built purely from mocks, one per slot.
///
/// Performs no environment resolution; each handle is named after its slot.
pub fn mock_provider() -> ModelProvider {
    let handle = |slot: ModelSlot| -> Arc<dyn Model> { Arc::new(MockModel::new(slot.as_str())) };
    ModelProvider::from_parts(
        handle(ModelSlot::Chat),
        handle(ModelSlot::Reasoning),
        handle(ModelSlot::Title),
        handle(ModelSlot::Artifact),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_names_are_deterministic() {
        let model = MockModel::new("chat-model");
        assert_eq!(model.name(), "chat-model");
        assert_eq!(model.system(), "mock");
        assert_eq!(model.identifier(), "mock/chat-model");
        assert!(model.profile().max_tokens.is_none());
    }

    #[test]
    fn factory_tags_models_with_provider_and_id() {
        let model = MockModelFactory
            .create(Provider::Openai, "gpt-4o")
            .unwrap();
        assert_eq!(model.name(), "openai:gpt-4o");
    }

    #[test]
    fn mock_provider_covers_every_slot() {
        let provider = mock_provider();
        for slot in ModelSlot::ALL {
            assert_eq!(provider.language_model(slot).name(), slot.as_str());
        }
    }
}
