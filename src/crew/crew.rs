use crate::agent::agent::Agent;
use crate::crew::error::CrewError;
use crate::crew::output::{CrewOutput, KickoffOutput, TaskOutput};
use crate::llm::TokenUsage;
use crate::task::task::Task;
use crate::task::template::Inputs;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::Instrument;

const CONTEXT_SEPARATOR: &str = "\n\n----------\n\n";

/// The seam between the run wrapper and whatever executes the tasks.
#[async_trait]
pub trait CrewEngine: Send + Sync {
    /// Execute every task in order with `inputs` substituted, returning the final artifact.
    async fn kickoff(&self, inputs: &Inputs) -> Result<CrewOutput, CrewError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Process {
    /// Tasks run one after another; each sees the output of the ones before it.
    #[default]
    Sequential,
}

/// An ordered pipeline of agents and the tasks they own.
#[derive(Debug, Clone)]
pub struct Crew {
    agents: Vec<Agent>,
    tasks: Vec<Task>,
    verbose: u8,
    process: Process,
}

impl Crew {
    /// Assemble a crew. Task order is execution order.
    ///
    /// Every task must name an agent of this crew, and agent role names
    /// must be unique so that assignment is unambiguous.
    pub fn new(agents: Vec<Agent>, tasks: Vec<Task>, verbose: u8) -> Result<Self, CrewError> {
        if tasks.is_empty() {
            return Err(CrewError::NoTasks);
        }

        for (i, agent) in agents.iter().enumerate() {
            if agents[..i].iter().any(|other| other.name() == agent.name()) {
                return Err(CrewError::DuplicateAgent(agent.name().to_string()));
            }
        }

        for task in &tasks {
            if !agents.iter().any(|agent| agent.name() == task.agent) {
                return Err(CrewError::UnknownAgent {
                    task: task.description.clone(),
                    agent: task.agent.clone(),
                });
            }
        }

        Ok(Self {
            agents,
            tasks,
            verbose,
            process: Process::Sequential,
        })
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    pub fn process(&self) -> Process {
        self.process
    }

    fn agent_for(&self, task: &Task) -> Result<&Agent, CrewError> {
        self.agents
            .iter()
            .find(|agent| agent.name() == task.agent)
            .ok_or_else(|| CrewError::UnknownAgent {
                task: task.description.clone(),
                agent: task.agent.clone(),
            })
    }
}

#[async_trait]
impl CrewEngine for Crew {
    async fn kickoff(&self, inputs: &Inputs) -> Result<CrewOutput, CrewError> {
        tracing::info!(
            tasks = self.tasks.len(),
            agents = self.agents.len(),
            process = ?self.process,
            "crew kickoff"
        );

        let mut tasks_output: Vec<TaskOutput> = Vec::with_capacity(self.tasks.len());
        let mut token_usage = TokenUsage::default();

        for (index, template) in self.tasks.iter().enumerate() {
            let task = template.interpolate(inputs)?;
            let agent = self.agent_for(&task)?;

            let context = (!tasks_output.is_empty()).then(|| {
                tasks_output
                    .iter()
                    .map(|output| output.raw.as_str())
                    .collect::<Vec<_>>()
                    .join(CONTEXT_SEPARATOR)
            });

            if self.verbose > 0 {
                tracing::info!(stage = index + 1, agent = %agent.name(), "Working Agent: {}", agent.name());
                tracing::info!(stage = index + 1, "Starting Task: {}", task.description);
            }

            let span = tracing::info_span!("task", stage = index + 1, agent = %agent.name());
            let response = agent
                .execute_task(&task, inputs, context.as_deref())
                .instrument(span)
                .await
                .map_err(|source| CrewError::Agent {
                    agent: agent.name().to_string(),
                    source,
                })?;

            if self.verbose > 1 {
                tracing::debug!(stage = index + 1, agent = %agent.name(), "Task output: {}", response.content);
            }
            tracing::info!(
                stage = index + 1,
                agent = %agent.name(),
                elapsed_ms = response.execution_time_ms,
                tokens = response.usage.total_tokens,
                "task completed"
            );

            token_usage.add(&response.usage);
            tasks_output.push(TaskOutput {
                description: task.description,
                agent: agent.name().to_string(),
                raw: response.content,
                json: response.json,
                usage: response.usage,
                execution_time_ms: response.execution_time_ms,
            });
        }

        // Crew::new guarantees at least one task
        let result = tasks_output
            .last()
            .map(KickoffOutput::from)
            .ok_or(CrewError::NoTasks)?;

        tracing::info!(total_tokens = token_usage.total_tokens, "crew finished");
        Ok(CrewOutput {
            result,
            tasks_output,
            token_usage,
        })
    }
}
