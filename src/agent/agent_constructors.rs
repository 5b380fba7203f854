use crate::agent::agent::{Agent, AgentModelConfig};
use crate::agent::role::AgentRole;
use crate::llm::LlmProvider;
use std::sync::Arc;

impl Agent {
    /// Create an agent sharing an existing client, the usual case inside a crew.
    pub fn with_provider(
        role: AgentRole,
        llm_config: AgentModelConfig,
        provider: Arc<dyn LlmProvider>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            allow_delegation: false,
            verbose: false,
            llm_config,
            provider,
        }
    }

    pub fn allow_delegation(mut self, allow: bool) -> Self {
        self.allow_delegation = allow;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
