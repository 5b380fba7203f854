use crate::llm::TokenUsage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of one task inside a kickoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskOutput {
    /// Interpolated task description
    pub description: String,
    /// Role name of the agent that ran the task
    pub agent: String,
    pub raw: String,
    pub json: Option<Value>,
    pub usage: TokenUsage,
    pub execution_time_ms: u64,
}

/// What a kickoff hands back: free text, or a structured value when the
/// final task asked for JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum KickoffOutput {
    Text(String),
    Structured(Value),
}

impl KickoffOutput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            KickoffOutput::Text(text) => Some(text),
            KickoffOutput::Structured(_) => None,
        }
    }
}

impl From<&TaskOutput> for KickoffOutput {
    fn from(output: &TaskOutput) -> Self {
        match &output.json {
            Some(value) => KickoffOutput::Structured(value.clone()),
            None => KickoffOutput::Text(output.raw.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewOutput {
    pub result: KickoffOutput,
    pub tasks_output: Vec<TaskOutput>,
    pub token_usage: TokenUsage,
}
