use crate::agent::agent::Agent;
use crate::agent::role::AgentRole;
use crate::llm::ChatMessage;
use crate::task::task::Task;

impl Agent {
    /// Build the system + user messages for one task.
    ///
    /// `role` is this agent's role with placeholders already filled and
    /// `task` is already interpolated. `context` carries earlier task output.
    pub fn build_messages(&self, role: &AgentRole, task: &Task, context: Option<&str>) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.build_system_prompt(role)),
            ChatMessage::user(self.build_task_prompt(task, context)),
        ]
    }

    fn build_system_prompt(&self, role: &AgentRole) -> String {
        format!(
            "You are {}. {}\n\
            Your personal goal is: {}",
            role.name, role.backstory, role.goal
        )
    }

    fn build_task_prompt(&self, task: &Task, context: Option<&str>) -> String {
        let mut prompt = format!("Current Task: {}", task.description);

        prompt.push_str(&format!(
            "\n\nThis is the expected criteria for your final answer: {}\n\
            You MUST return the actual complete content as the final answer, not a summary.",
            task.expected_output
        ));

        if let Some(context) = context.filter(|c| !c.trim().is_empty()) {
            prompt.push_str(&format!(
                "\n\nThis is the context you're working with:\n{}",
                context
            ));
        }

        prompt.push_str(&format!("\n\nIMPORTANT - Output Format: {}", task.get_format_prompt()));
        prompt
    }
}
