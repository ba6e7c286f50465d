//! Struct definitions and serde defaults for cc configuration.

use serde::{Deserialize, Serialize};

/// Root configuration, deserialized from `config.toml` / `cc.toml`.
///
/// Every field has a serde default so cc runs without any config file.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Gemini model identifier (e.g. `"gemini-1.5-flash"`).
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Custom endpoint for the Gemini API (useful for proxies).
    #[serde(default)]
    pub base_url: Option<String>,
    /// Optional system prompt sent as the agent preamble.
    #[serde(default)]
    pub system_prompt: Option<String>,
    /// Maximum tokens for a single reply.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u64,
    /// Optional limits on blocking calls.
    #[serde(default)]
    pub timeouts: TimeoutConfig,
}

/// Timeouts for the two calls that can block indefinitely.
///
/// `None` means wait forever.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Seconds to wait for a reply from the AI service.
    pub request_secs: Option<u64>,
    /// Seconds to let a `run` command execute before killing it.
    pub command_secs: Option<u64>,
}

/// A config file as written on disk, with nothing filled in.
///
/// Used for layering: a project file only overrides the fields it sets.
#[derive(Debug, Default, Deserialize)]
pub(super) struct PartialConfig {
    pub model: Option<String>,
    pub api_key_env: Option<String>,
    pub base_url: Option<String>,
    pub system_prompt: Option<String>,
    pub max_tokens: Option<u64>,
    #[serde(default)]
    pub timeouts: TimeoutConfig,
}

pub(super) fn default_model() -> String {
    crate::constants::DEFAULT_MODEL.to_string()
}

pub(super) fn default_api_key_env() -> String {
    crate::constants::DEFAULT_API_KEY_ENV.to_string()
}

pub(super) fn default_max_tokens() -> u64 {
    crate::constants::DEFAULT_MAX_TOKENS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_api_key_env(),
            base_url: None,
            system_prompt: None,
            max_tokens: default_max_tokens(),
            timeouts: TimeoutConfig::default(),
        }
    }
}
