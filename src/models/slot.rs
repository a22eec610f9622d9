//! Logical model slots.

use serde::{Deserialize, Serialize};

/// Application-level model slot, decoupled from vendor model ids.
///
/// Serializes to the wire name used in catalogs and lookups, e.g.
/// `"chat-model-reasoning"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelSlot {
    /// Default conversational model.
    #[serde(rename = "chat-model")]
    Chat,
    /// Extended-thinking / chain-of-thought model.
    #[serde(rename = "chat-model-reasoning")]
    Reasoning,
    /// Conversation title generation.
    #[serde(rename = "title-model")]
    Title,
    /// Artifact generation.
    #[serde(rename = "artifact-model")]
    Artifact,
}

impl ModelSlot {
    /// All slots, in catalog order.
    pub const ALL: [ModelSlot; 4] = [
        ModelSlot::Chat,
        ModelSlot::Reasoning,
        ModelSlot::Title,
        ModelSlot::Artifact,
    ];

    /// The slot's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelSlot::Chat => "chat-model",
            ModelSlot::Reasoning => "chat-model-reasoning",
            ModelSlot::Title => "title-model",
            ModelSlot::Artifact => "artifact-model",
        }
    }

    /// Parse a wire name back into a slot.
    pub fn from_name(name: &str) -> Option<ModelSlot> {
        match name {
            "chat-model" => Some(ModelSlot::Chat),
            "chat-model-reasoning" => Some(ModelSlot::Reasoning),
            "title-model" => Some(ModelSlot::Title),
            "artifact-model" => Some(ModelSlot::Artifact),
            _ => None,
        }
    }
}

impl std::fmt::Display for ModelSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
