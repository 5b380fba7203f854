use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::agent::agent::AgentModelConfig;
use crate::agent::provider::{LlmConfig, Provider};

const CONFIG_FILE: &str = "content-crew";
const ENV_PREFIX: &str = "CONTENT_CREW";
const API_KEY_VAR: &str = "GROQ_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid log level '{0}'")]
    InvalidLevel(String),
    #[error("failed to render settings: {0}")]
    Render(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: Provider::Groq.get_base_url(),
            model: "llama3-70b-8192".to_string(),
            temperature: 0.0,
            max_tokens: 4096,
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrewSettings {
    pub verbose: u8,
}

impl Default for CrewSettings {
    fn default() -> Self {
        Self { verbose: 2 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Lowest level recorded into `process_logs`
    pub capture_level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            capture_level: "debug".to_string(),
        }
    }
}

impl LoggingSettings {
    pub fn level(&self) -> Result<Level, SettingsError> {
        Level::from_str(&self.capture_level).map_err(|_| SettingsError::InvalidLevel(self.capture_level.clone()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub llm: LlmSettings,
    pub crew: CrewSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Defaults, then `content-crew.toml` if present, then `CONTENT_CREW__*` variables.
    ///
    /// `GROQ_API_KEY` fills the API key when no other layer set one.
    pub fn load() -> Result<Self, SettingsError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false));
        Self::from_builder(builder)
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let builder = config::Config::builder().add_source(config::File::from(path));
        Self::from_builder(builder)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, SettingsError> {
        let mut settings: Settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if settings.llm.api_key.is_none() {
            settings.llm.api_key = std::env::var(API_KEY_VAR).ok().filter(|key| !key.is_empty());
        }
        Ok(settings)
    }

    pub fn model_config(&self) -> AgentModelConfig {
        let llm_config = LlmConfig::new_with_base_url(
            Provider::Groq,
            self.llm.api_key.clone(),
            self.llm.base_url.clone(),
        );
        AgentModelConfig::new(
            llm_config,
            self.llm.model.clone(),
            self.llm.temperature,
            self.llm.max_tokens,
        )
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
