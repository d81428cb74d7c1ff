use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Failure talking to the search engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Engine unreachable: {0}")]
    Transport(String),
    #[error("Engine request timed out: {0}")]
    Timeout(String),
    #[error("Engine responded with {status}")]
    Status { status: StatusCode, body: Value },
    #[error("Engine response is not valid JSON: {0}")]
    Decode(String),
}

impl EngineError {
    /// Short machine code for logs and exit codes
    pub fn error_code(&self) -> &'static str {
        match self {
            EngineError::Transport(_) => "engine_unreachable",
            EngineError::Timeout(_) => "engine_timeout",
            EngineError::Status { .. } => "engine_rejected",
            EngineError::Decode(_) => "engine_bad_response",
        }
    }

    /// Best-effort error payload for clients.
    ///
    /// Prefers the body the engine sent back (usually an object with `error`
    /// and `status`), falling back to the error message.
    pub fn payload(&self) -> Value {
        match self {
            EngineError::Status { body, .. } if !is_blank(body) => body.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

fn is_blank(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

impl From<reqwest::Error> for EngineError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            EngineError::Timeout(err.to_string())
        } else if err.is_decode() {
            EngineError::Decode(err.to_string())
        } else {
            EngineError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Decode(err.to_string())
    }
}
