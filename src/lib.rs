//! Environment-driven LLM provider selection.
//!
//! Maps environment variables to a provider and model configuration, then
//! binds serdesAI model clients behind a fixed set of logical slot names.
//!
//! ## Main Components
//!
//! - [`config`] - Provider selection and configuration from the environment
//! - [`models`] - Logical model slots and the user-facing catalog
//! - [`provider`] - Model factories and the per-slot composite provider
//! - [`runtime`] - Build-once startup wiring for hosting applications
//!
//! ## Quick Start
//!
//! ```ignore
//! use modelenv::{ModelRuntime, ModelSlot, SdkModelFactory};
//!
//! let runtime = ModelRuntime::init(&SdkModelFactory::new())?;
//! let chat = runtime.provider.language_model(ModelSlot::Chat);
//! for model in &runtime.chat_models {
//!     println!("{}: {}", model.id, model.name);
//! }
//! ```

pub mod config;
pub mod models;
pub mod provider;
pub mod runtime;

pub use config::{has_required_api_key, ConfigError, Provider, ProviderConfig};
pub use models::{chat_models, chat_models_for, ModelDescriptor, ModelSlot, DEFAULT_CHAT_MODEL};
pub use provider::{MockModelFactory, ModelFactory, ModelProvider, ProviderError, SdkModelFactory};
pub use runtime::ModelRuntime;

/// Serialized access to the process environment for tests.
///
/// The resolver reads live environment variables, so tests that set them
/// must not interleave. `scoped()` takes a process-wide lock and clears
/// every variable the crate reads, on entry and again on drop.
#[cfg(test)]
pub(crate) mod testenv {
    use std::sync::{Mutex, MutexGuard, PoisonError};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Every variable the crate reads, aliases and API keys included.
    const VARS: [&str; 17] = [
        "LLM_PROVIDER",
        "LLM_CHAT_MODEL",
        "LLM_REASONING_MODEL",
        "LLM_TITLE_MODEL",
        "LLM_ARTIFACT_MODEL",
        "LLM_CHAT_MODEL_NAME",
        "LLM_REASONING_MODEL_NAME",
        "PUBLIC_LLM_PROVIDER",
        "PUBLIC_LLM_CHAT_MODEL",
        "PUBLIC_LLM_REASONING_MODEL",
        "PUBLIC_LLM_TITLE_MODEL",
        "PUBLIC_LLM_ARTIFACT_MODEL",
        "PUBLIC_LLM_CHAT_MODEL_NAME",
        "PUBLIC_LLM_REASONING_MODEL_NAME",
        "OPENAI_API_KEY",
        "ANTHROPIC_API_KEY",
        "GOOGLE_API_KEY",
    ];

    pub struct EnvGuard(#[allow(dead_code)] MutexGuard<'static, ()>);

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            clear();
        }
    }

    /// Lock the environment and start from a clean slate.
    pub fn scoped() -> EnvGuard {
        let guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear();
        EnvGuard(guard)
    }

    fn clear() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }
}
