//! Provider and model configuration from the process environment.

mod provider;
mod resolver;

pub use provider::Provider;
pub use resolver::{has_required_api_key, ConfigError, ProviderConfig};
pub use resolver::{
    LLM_ARTIFACT_MODEL, LLM_CHAT_MODEL, LLM_CHAT_MODEL_NAME, LLM_PROVIDER, LLM_REASONING_MODEL,
    LLM_REASONING_MODEL_NAME, LLM_TITLE_MODEL, PUBLIC_PREFIX,
};
