use crate::agent::agent::{Agent, AgentError, AgentResponse};
use crate::agent::output_handler::OutputHandler;
use crate::llm::CompletionRequest;
use crate::task::task::Task;
use crate::task::template::Inputs;

impl Agent {
    /// Run one task: a single completion call, then output-format handling.
    ///
    /// `task` must already be interpolated; the agent fills its own role
    /// templates from `inputs`. No retries: the first failure is returned.
    pub async fn execute_task(
        &self,
        task: &Task,
        inputs: &Inputs,
        context: Option<&str>,
    ) -> Result<AgentResponse, AgentError> {
        let start_time = std::time::Instant::now();

        let role = self.role.interpolate(inputs)?;
        let messages = self.build_messages(&role, task, context);

        if self.verbose {
            for message in &messages {
                tracing::debug!(agent = %self.role.name, role = ?message.role, "{}", message.content);
            }
        }

        let request = CompletionRequest::new(
            messages,
            self.llm_config.model_name.clone(),
            Some(self.llm_config.temperature),
            Some(self.llm_config.max_tokens),
        );

        let response = self.provider.completion(request).await?;
        if self.verbose {
            tracing::debug!(agent = %self.role.name, "Final Answer: {}", response.content);
        }

        let processed = OutputHandler::new(task.output_format.clone()).process_output(&response.content)?;

        Ok(AgentResponse {
            content: processed.raw,
            json: processed.json,
            usage: response.usage,
            execution_time_ms: start_time.elapsed().as_millis() as u64,
            model_used: self.llm_config.model_name.clone(),
            temperature: self.llm_config.temperature,
            timestamp: chrono::Utc::now(),
        })
    }
}
