pub mod agent;
pub mod role;
pub mod output_handler;
pub mod agent_constructors;
pub mod agent_execution;
pub mod agent_prompts;
pub mod provider;


// Re-export main types for easier access
pub use agent::Agent;
pub use agent::AgentModelConfig;
pub use agent::AgentResponse;
pub use agent::AgentError;
pub use role::*;
pub use output_handler::*;
pub use provider::*;
