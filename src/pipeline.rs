//! Topic in, article out: the run wrapper around a crew.

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::capture::LogCapture;
use crate::crew::content::content_crew;
use crate::crew::{Crew, CrewEngine, CrewError, CrewOutput, KickoffOutput};
use crate::settings::{Settings, SettingsError};
use crate::task::template::Inputs;

/// `final_output` when the crew's last task produced structured data.
pub const NO_OUTPUT_SENTINEL: &str = "No output generated";

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Crew(#[from] CrewError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// The two strings a run reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub final_output: String,
    pub process_logs: String,
}

impl RunResult {
    /// Text is kept verbatim; structured output collapses to [`NO_OUTPUT_SENTINEL`].
    pub fn from_output(output: &KickoffOutput, process_logs: String) -> Self {
        let final_output = output.as_text().unwrap_or(NO_OUTPUT_SENTINEL).to_string();
        Self {
            final_output,
            process_logs,
        }
    }
}

/// Everything a run produced, for callers that want the structured result.
#[derive(Debug, Clone)]
pub struct DetailedRun {
    pub output: CrewOutput,
    pub process_logs: String,
}

pub struct Pipeline<E> {
    engine: E,
    capture_level: Level,
}

impl Pipeline<Crew> {
    /// The planner/writer/editor crew wired to the configured LLM.
    pub fn from_settings(settings: &Settings) -> Result<Self, PipelineError> {
        let model_config = settings.model_config();
        let provider = model_config.llm_config.build_provider();
        let crew = content_crew(model_config, provider, settings.crew.verbose)?;
        Ok(Pipeline::new(crew).with_capture_level(settings.logging.level()?))
    }
}

impl<E: CrewEngine> Pipeline<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            capture_level: Level::DEBUG,
        }
    }

    pub fn with_capture_level(mut self, level: Level) -> Self {
        self.capture_level = level;
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub async fn run(&self, topic: &str) -> Result<RunResult, PipelineError> {
        let detailed = self.run_detailed(topic).await?;
        Ok(RunResult::from_output(&detailed.output.result, detailed.process_logs))
    }

    /// Like [`run`](Self::run) but keeps the full crew output.
    ///
    /// Engine errors propagate unchanged; logs captured up to the failure are dropped.
    pub async fn run_detailed(&self, topic: &str) -> Result<DetailedRun, PipelineError> {
        let inputs = Inputs::from([("topic".to_string(), topic.to_string())]);

        let capture = LogCapture::new(self.capture_level);
        let output = capture.scope(self.engine.kickoff(&inputs)).await?;

        Ok(DetailedRun {
            output,
            process_logs: capture.contents(),
        })
    }
}
