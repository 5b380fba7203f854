use crate::task::task::OutputFormat;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Output cannot be empty")]
    Empty,
    #[error("Invalid JSON format: {source}. Content: {content}")]
    InvalidJson {
        source: serde_json::Error,
        content: String,
    },
    #[error("JSON output does not match the requested shape: {0}")]
    SchemaViolation(String),
}

/// Model output after format handling.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedOutput {
    pub raw: String,
    pub json: Option<Value>,
}

/// Turns raw model text into a task result according to the task's output format
#[derive(Debug, Clone)]
pub struct OutputHandler {
    pub format: OutputFormat,
}

impl OutputHandler {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn process_output(&self, raw_output: &str) -> Result<ProcessedOutput, OutputError> {
        if raw_output.trim().is_empty() {
            return Err(OutputError::Empty);
        }

        match &self.format {
            OutputFormat::Text => Ok(ProcessedOutput {
                raw: raw_output.to_string(),
                json: None,
            }),
            OutputFormat::Json { schema, strict } => {
                let content = strip_code_fence(raw_output);
                let parsed: Value = serde_json::from_str(&content).map_err(|source| OutputError::InvalidJson {
                    source,
                    content: content.clone(),
                })?;
                schema
                    .validate(&parsed, *strict)
                    .map_err(OutputError::SchemaViolation)?;
                Ok(ProcessedOutput {
                    raw: content,
                    json: Some(parsed),
                })
            }
        }
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new(OutputFormat::Text)
    }
}

// Models like to wrap JSON in ```json ... ``` even when told not to.
fn strip_code_fence(output: &str) -> String {
    let trimmed = output.trim();
    let inner = match trimmed.strip_prefix("```").and_then(|rest| rest.strip_suffix("```")) {
        Some(inner) => inner,
        None => return trimmed.to_string(),
    };

    // optional language tag right after the opening fence, same line or not
    let tag_len = inner
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(inner.len());
    let body = inner[tag_len..].trim();
    if tag_len > 0 && !body.is_empty() {
        body.to_string()
    } else {
        inner.trim().to_string()
    }
}
