//! The planner → writer → editor crew that turns a topic into a blog post.

use crate::agent::agent::{Agent, AgentModelConfig};
use crate::agent::role::AgentRole;
use crate::crew::crew::Crew;
use crate::crew::error::CrewError;
use crate::llm::LlmProvider;
use crate::task::task::Task;
use std::sync::Arc;

pub const PLANNER: &str = "Content Planner";
pub const WRITER: &str = "Content Writer";
pub const EDITOR: &str = "Editor";

pub fn planner_role() -> AgentRole {
    AgentRole::new(
        PLANNER,
        "Plan engaging and factually accurate content on {topic}",
        "You are tasked with planning a blog article on {topic}. \
         Your goal is to research trends, gather insights, and \
         create a structure that will be handed to the writer.",
    )
}

pub fn writer_role() -> AgentRole {
    AgentRole::new(
        WRITER,
        "Write an insightful opinion piece on {topic}",
        "You are a writer working with the plan created by the Planner. \
         Your goal is to write a clear, engaging article, \
         providing factual information and well-reasoned opinions.",
    )
}

pub fn editor_role() -> AgentRole {
    AgentRole::new(
        EDITOR,
        "Edit the blog post to align with the organization's style",
        "You receive the article from the Writer. Your role is to polish it, \
         ensuring it adheres to journalistic standards, the brand voice, \
         and is free of errors.",
    )
}

pub fn plan_task() -> Task {
    Task::new(
        "Create an outline and key SEO points for {topic}. \
         This includes audience analysis, introduction, main points, and conclusion.",
        "A detailed content plan with outline, keywords, and sources.",
        PLANNER,
    )
}

pub fn write_task() -> Task {
    Task::new(
        "Using the content plan, craft a detailed article with a structured flow, \
         incorporating SEO and well-written sections.",
        "A draft of the article with clear, engaging content.",
        WRITER,
    )
}

pub fn edit_task() -> Task {
    Task::new(
        "Edit the draft for grammar, flow, alignment with the brand's voice, \
         and readiness for publication.",
        "A polished, publication-ready article.",
        EDITOR,
    )
}

/// Build the three-stage content crew; all agents share `provider`.
pub fn content_crew(
    llm_config: AgentModelConfig,
    provider: Arc<dyn LlmProvider>,
    verbose: u8,
) -> Result<Crew, CrewError> {
    let agents = [planner_role(), writer_role(), editor_role()]
        .into_iter()
        .map(|role| {
            Agent::with_provider(role, llm_config.clone(), provider.clone())
                .allow_delegation(false)
                .verbose(true)
        })
        .collect();

    Crew::new(agents, vec![plan_task(), write_task(), edit_task()], verbose)
}
