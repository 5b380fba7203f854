use crate::llm::{ChatCompletionsProvider, LlmProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// LLM Provider types supported by content-crew
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Provider {
    /// Groq API
    Groq,
    /// OpenAI API
    OpenAI,
    /// Any other OpenAI-compatible endpoint
    Custom(String),
}

impl Provider {
    /// Get the base URL for the provider
    pub fn get_base_url(&self) -> String {
        match self {
            Provider::Groq => "https://api.groq.com/openai/v1".to_string(),
            Provider::OpenAI => "https://api.openai.com/v1".to_string(),
            Provider::Custom(url) => url.clone(),
        }
    }
}

/// Connection settings for the LLM provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// The provider to use
    pub provider: Provider,
    /// API key for the provider
    pub api_key: Option<String>,
    /// Custom base URL (overrides default for provider)
    pub base_url: Option<String>,
    /// Additional headers for the request
    pub headers: Option<std::collections::HashMap<String, String>>,
}

impl LlmConfig {
    pub fn new(provider: Provider, api_key: Option<String>) -> Self {
        Self {
            provider,
            api_key,
            base_url: None,
            headers: None,
        }
    }

    pub fn new_with_base_url(provider: Provider, api_key: Option<String>, base_url: String) -> Self {
        Self {
            provider,
            api_key,
            base_url: Some(base_url),
            headers: None,
        }
    }

    pub fn resolved_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| self.provider.get_base_url())
    }

    /// Build the shared client every agent of a crew talks through.
    pub fn build_provider(&self) -> Arc<dyn LlmProvider> {
        let client = ChatCompletionsProvider::new(self.api_key.clone(), self.resolved_base_url())
            .with_headers(self.headers.clone().unwrap_or_default());
        Arc::new(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_override_wins() {
        let config = LlmConfig::new_with_base_url(
            Provider::Groq,
            Some("key".to_string()),
            "http://localhost:8080/v1".to_string(),
        );
        assert_eq!(config.resolved_base_url(), "http://localhost:8080/v1");

        let config = LlmConfig::new(Provider::Groq, None);
        assert_eq!(config.resolved_base_url(), "https://api.groq.com/openai/v1");
    }
}
