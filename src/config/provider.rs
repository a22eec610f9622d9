//! Provider selection type.

use serde::{Deserialize, Serialize};

use super::resolver::ConfigError;

/// Supported LLM providers.
///
/// Closed enumeration: anything outside it is rejected at resolution time,
/// there is no catch-all variant and no default provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// OpenAI API (GPT models)
    Openai,
    /// Anthropic API (Claude models)
    Anthropic,
    /// Google Gemini API
    Google,
}

impl Provider {
    /// All supported providers.
    pub const ALL: [Provider; 3] = [Provider::Openai, Provider::Anthropic, Provider::Google];

    /// Parse a provider name, case-insensitively.
    pub fn parse(s: &str) -> Option<Provider> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Some(Provider::Openai),
            "anthropic" => Some(Provider::Anthropic),
            "google" => Some(Provider::Google),
            _ => None,
        }
    }

    /// Name of the environment variable holding this provider's API key.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Provider::Openai => "OPENAI_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
            Provider::Google => "GOOGLE_API_KEY",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Openai => write!(f, "openai"),
            Provider::Anthropic => write!(f, "anthropic"),
            Provider::Google => write!(f, "google"),
        }
    }
}

impl std::str::FromStr for Provider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::parse(s).ok_or(ConfigError::MissingOrInvalidProvider)
    }
}
