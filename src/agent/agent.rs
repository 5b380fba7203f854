use crate::agent::output_handler::OutputError;
use crate::agent::provider::LlmConfig;
use crate::agent::role::AgentRole;
use crate::llm::{LlmError, LlmProvider, TokenUsage};
use crate::task::template::TemplateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Core Agent structure
///
/// Agents are immutable once built: a crew only ever reads them.
#[derive(Clone)]
pub struct Agent {
    pub(crate) id: String,
    pub(crate) role: AgentRole,
    pub(crate) allow_delegation: bool,
    pub(crate) verbose: bool,
    pub(crate) llm_config: AgentModelConfig,
    pub(crate) provider: Arc<dyn LlmProvider>,
}

/// Model parameters for agents
#[derive(Debug, Clone)]
pub struct AgentModelConfig {
    pub model_name: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub llm_config: LlmConfig,
}

impl AgentModelConfig {
    pub fn new(llm_config: LlmConfig, model_name: String, temperature: f32, max_tokens: u32) -> Self {
        Self {
            model_name,
            temperature,
            max_tokens,
            llm_config,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// What one agent produced for one task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResponse {
    /// Raw text returned by the model, code fences removed
    pub content: String,
    /// Parsed value when the task asked for JSON
    pub json: Option<serde_json::Value>,
    pub usage: TokenUsage,
    pub execution_time_ms: u64,
    pub model_used: String,
    pub temperature: f32,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Agent {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> &AgentRole {
        &self.role
    }

    pub fn name(&self) -> &str {
        &self.role.name
    }

    pub fn allows_delegation(&self) -> bool {
        self.allow_delegation
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn llm_config(&self) -> &AgentModelConfig {
        &self.llm_config
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("id", &self.id)
            .field("role", &self.role)
            .field("allow_delegation", &self.allow_delegation)
            .field("verbose", &self.verbose)
            .field("llm_config", &self.llm_config)
            .finish_non_exhaustive()
    }
}
