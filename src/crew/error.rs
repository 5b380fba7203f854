use crate::agent::agent::AgentError;
use crate::task::template::TemplateError;

#[derive(Debug, thiserror::Error)]
pub enum CrewError {
    #[error("a crew needs at least one task")]
    NoTasks,
    #[error("more than one agent plays the role '{0}'")]
    DuplicateAgent(String),
    #[error("task '{task}' is assigned to '{agent}', which is not part of the crew")]
    UnknownAgent { task: String, agent: String },
    #[error("failed to fill task templates: {0}")]
    Template(#[from] TemplateError),
    #[error("agent '{agent}' failed: {source}")]
    Agent {
        agent: String,
        #[source]
        source: AgentError,
    },
}
