use crate::task::template::{interpolate, Inputs, TemplateError};
use serde::{Deserialize, Serialize};

/// The persona an agent plays in a crew.
///
/// `goal` and `backstory` are templates: `{topic}`-style placeholders are
/// filled from the kickoff inputs right before the agent runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRole {
    /// Name of the role (e.g., "Content Planner", "Editor")
    pub name: String,
    pub goal: String,
    pub backstory: String,
}

impl AgentRole {
    pub fn new(name: impl Into<String>, goal: impl Into<String>, backstory: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            goal: goal.into(),
            backstory: backstory.into(),
        }
    }

    /// Fill goal and backstory placeholders from the kickoff inputs.
    pub fn interpolate(&self, inputs: &Inputs) -> Result<AgentRole, TemplateError> {
        Ok(AgentRole {
            name: self.name.clone(),
            goal: interpolate(&self.goal, inputs)?,
            backstory: interpolate(&self.backstory, inputs)?,
        })
    }
}
