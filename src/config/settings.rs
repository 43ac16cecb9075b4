//! User settings for FinTooz
//!
//! Manages user preferences: the default owner, reply language, currency
//! symbol, and the chat-completion endpoint used by the assistant.

use serde::{Deserialize, Serialize};

use super::paths::FinPaths;
use crate::error::FinError;

/// Environment variable holding the assistant API key
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Environment variable overriding the assistant endpoint
pub const API_URL_ENV: &str = "OPENROUTER_API_URL";

/// Chat-completion endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantSettings {
    /// OpenAI-compatible chat-completions URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Value of the `HTTP-Referer` header
    #[serde(default = "default_referer")]
    pub referer: String,

    /// Value of the `X-Title` header
    #[serde(default = "default_title")]
    pub title: String,

    /// Token cap for advice requests
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature for advice requests
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_api_url() -> String {
    "https://openrouter.ai/api/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "deepseek/deepseek-chat".to_string()
}

fn default_referer() -> String {
    "https://fintooz.com".to_string()
}

fn default_title() -> String {
    "FinTooz".to_string()
}

fn default_max_tokens() -> u32 {
    1500
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            referer: default_referer(),
            title: default_title(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl AssistantSettings {
    /// Endpoint to call, honoring the `OPENROUTER_API_URL` override
    pub fn effective_api_url(&self) -> String {
        std::env::var(API_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.api_url.clone())
    }

    /// API key from the environment; never persisted
    pub fn api_key(&self) -> Result<String, FinError> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| FinError::Config(format!("{} is not set", API_KEY_ENV)))
    }
}

/// User settings for FinTooz
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Owner used when `--user` is not given
    #[serde(default = "default_owner")]
    pub default_owner: String,

    /// Language the assistant is asked to reply in
    #[serde(default = "default_language")]
    pub language: String,

    /// Currency symbol used by the text renderers
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Chat-completion endpoint settings
    #[serde(default)]
    pub assistant: AssistantSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_owner() -> String {
    "local".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_owner: default_owner(),
            language: default_language(),
            currency_symbol: default_currency(),
            assistant: AssistantSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinPaths) -> Result<Self, FinError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FinError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| FinError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinPaths) -> Result<(), FinError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
