use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::agent::agent::{Agent, AgentModelConfig};
use crate::agent::provider::{LlmConfig, Provider};
use crate::agent::role::AgentRole;
use crate::llm::{CompletionRequest, CompletionResponse, LlmError, LlmProvider, TokenUsage};

/// Stand-in LLM that replays queued replies and records every request.
#[derive(Clone, Default)]
pub struct ScriptedProvider {
    replies: Arc<Mutex<VecDeque<Result<String, u16>>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl ScriptedProvider {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let provider = Self::default();
        for reply in replies {
            provider.push_reply(reply);
        }
        provider
    }

    pub fn push_reply(&self, reply: impl Into<String>) {
        self.replies.lock().unwrap().push_back(Ok(reply.into()));
    }

    /// Queue an HTTP-style failure with the given status.
    pub fn push_failure(&self, status: u16) {
        self.replies.lock().unwrap().push_back(Err(status));
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn shared(&self) -> Arc<dyn LlmProvider> {
        Arc::new(self.clone())
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    async fn completion(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        tracing::debug!(model = %request.model, "scripted completion");
        self.requests.lock().unwrap().push(request);
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Ok(content)) => Ok(CompletionResponse {
                content,
                usage: TokenUsage {
                    prompt_tokens: 10,
                    completion_tokens: 5,
                    total_tokens: 15,
                },
            }),
            Some(Err(status)) => Err(LlmError::from_status(status, "scripted failure".to_string())),
            None => Err(LlmError::EmptyResponse),
        }
    }
}

pub fn test_model_config() -> AgentModelConfig {
    AgentModelConfig::new(
        LlmConfig::new(Provider::Groq, Some("test-key".to_string())),
        "llama3-70b-8192".to_string(),
        0.0,
        1024,
    )
}

pub fn test_agent(role: AgentRole, provider: &ScriptedProvider) -> Agent {
    Agent::with_provider(role, test_model_config(), provider.shared())
}
