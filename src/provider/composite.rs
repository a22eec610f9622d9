//! Composite provider: one ready model handle per logical slot.

use std::sync::Arc;

use serdes_ai_models::Model;
use tracing::info;

use crate::config::ProviderConfig;
use crate::models::ModelSlot;

use super::factory::{ModelFactory, ProviderError};

/// Named lookup of ready model clients, one per [`ModelSlot`].
///
/// Construction is all-or-nothing: any resolution or factory error aborts the
/// whole build. Handles are created fresh per build and shared via `Arc`.
pub struct ModelProvider {
    chat: Arc<dyn Model>,
    reasoning: Arc<dyn Model>,
    title: Arc<dyn Model>,
    artifact: Arc<dyn Model>,
}

impl ModelProvider {
    /// Build handles for every slot of a resolved configuration.
    pub fn build(
        config: &ProviderConfig,
        factory: &dyn ModelFactory,
    ) -> Result<Self, ProviderError> {
        let provider = config.provider;
        let built = Self {
            chat: factory.create(provider, &config.chat_model)?,
            reasoning: factory.create(provider, &config.reasoning_model)?,
            title: factory.create(provider, &config.title_model)?,
            artifact: factory.create(provider, &config.artifact_model)?,
        };
        info!(provider = %provider, "model provider ready");
        Ok(built)
    }

    /// Resolve the environment, then build.
    pub fn from_env(factory: &dyn ModelFactory) -> Result<Self, ProviderError> {
        Ok(Self::build(&ProviderConfig::from_env()?, factory)?)
    }

    /// Assemble a provider from four pre-built handles.
    pub fn from_parts(
        chat: Arc<dyn Model>,
        reasoning: Arc<dyn Model>,
        title: Arc<dyn Model>,
        artifact: Arc<dyn Model>,
    ) -> Self {
        Self {
            chat,
            reasoning,
            title,
            artifact,
        }
    }

    /// The handle bound to a slot.
    pub fn language_model(&self, slot: ModelSlot) -> Arc<dyn Model> {
        match slot {
            ModelSlot::Chat => Arc::clone(&self.chat),
            ModelSlot::Reasoning => Arc::clone(&self.reasoning),
            ModelSlot::Title => Arc::clone(&self.title),
            ModelSlot::Artifact => Arc::clone(&self.artifact),
        }
    }

    /// Look a handle up by its wire name ("chat-model", "title-model", ...).
    pub fn get(&self, name: &str) -> Option<Arc<dyn Model>> {
        ModelSlot::from_name(name).map(|slot| self.language_model(slot))
    }
}
