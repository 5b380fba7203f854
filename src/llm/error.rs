#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("no API key configured for the LLM provider")]
    MissingApiKey,
    #[error("LLM provider rejected the credentials ({status}): {message}")]
    Unauthorized { status: u16, message: String },
    #[error("LLM API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Empty response from LLM provider")]
    EmptyResponse,
}

impl LlmError {
    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => LlmError::Unauthorized { status, message },
            _ => LlmError::Api { status, message },
        }
    }
}
