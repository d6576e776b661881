//! Error Types

use thiserror::Error;

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Agent error types
///
/// Only control-flow failures live here. Malformed action arguments are
/// "content" failures: handlers turn them into observation strings so the
/// reasoning loop can keep going with the error text visible to the model.
#[derive(Error, Debug)]
pub enum AgentError {
    /// Model collaborator unreachable, or returned a malformed response
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Parsed action name has no registered handler
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Role string from the wire is not system/user/assistant
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// Configuration error (missing API key, bad environment)
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl AgentError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            AgentError::ModelUnavailable(_) => {
                "The model service is currently unavailable. Please try again.".into()
            }
            AgentError::UnknownAction(name) => {
                format!("The action '{}' is not available.", name)
            }
            AgentError::InvalidRole(role) => format!("Unrecognized message role '{}'.", role),
            AgentError::Config(msg) => format!("Configuration problem: {}", msg),
            _ => "An unexpected error occurred.".into(),
        }
    }
}

impl From<anyhow::Error> for AgentError {
    fn from(err: anyhow::Error) -> Self {
        AgentError::Other(err.to_string())
    }
}
