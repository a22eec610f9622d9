//! User-facing model catalog.
//!
//! Produces the fixed pair of selectable models (chat and reasoning) for UI
//! presentation. Display names come from the resolved configuration;
//! descriptions from a fixed per-provider table.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, Provider, ProviderConfig};

use super::slot::ModelSlot;

/// Slot selected when the user has not picked a model.
pub const DEFAULT_CHAT_MODEL: &str = "chat-model";

/// A selectable model as presented in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Logical slot this entry selects.
    pub id: ModelSlot,
    /// Human-readable model name.
    pub name: String,
    /// One-line description of the model's strengths.
    pub description: String,
}

/// Descriptions for the (chat, reasoning) pair of a provider.
fn descriptions(provider: Provider) -> (&'static str, &'static str) {
    match provider {
        Provider::Openai => (
            "Advanced multimodal model with vision and text capabilities",
            "Uses advanced chain-of-thought reasoning for complex problems",
        ),
        Provider::Anthropic => (
            "Advanced AI assistant with strong reasoning and coding abilities",
            "Extended thinking mode for complex analysis and problem solving",
        ),
        Provider::Google => (
            "Fast and efficient multimodal model with large context window",
            "Advanced reasoning model for complex analytical tasks",
        ),
    }
}

/// Build the selectable model list for a resolved configuration.
///
/// Always exactly two entries, the chat slot first.
pub fn chat_models_for(config: &ProviderConfig) -> Vec<ModelDescriptor> {
    let (chat, reasoning) = descriptions(config.provider);

    vec![
        ModelDescriptor {
            id: ModelSlot::Chat,
            name: config.chat_model_name.clone(),
            description: chat.to_string(),
        },
        ModelDescriptor {
            id: ModelSlot::Reasoning,
            name: config.reasoning_model_name.clone(),
            description: reasoning.to_string(),
        },
    ]
}

/// Resolve the environment and build the selectable model list.
pub fn chat_models() -> Result<Vec<ModelDescriptor>, ConfigError> {
    Ok(chat_models_for(&ProviderConfig::from_env()?))
}
