use std::fmt::Display;

use thiserror::Error;

/// Failures inside a tool. The display text is what the model gets to read.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolError {
    #[error("Unknown function: {0}")]
    ToolNotFound(String),

    #[error("Error: {0}")]
    InvalidParameters(String),

    #[error("Error: {status} {body}")]
    Remote { status: u16, body: String },

    #[error("Error while {action}: {message}")]
    ExecutionError { action: String, message: String },
}

impl ToolError {
    pub fn execution(action: &str, err: impl Display) -> Self {
        ToolError::ExecutionError {
            action: action.to_string(),
            message: format!("{:#}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_display() {
        assert_eq!(
            ToolError::ToolNotFound("fly".to_string()).to_string(),
            "Unknown function: fly"
        );
        assert_eq!(
            ToolError::InvalidParameters("User ID is required".to_string()).to_string(),
            "Error: User ID is required"
        );
        assert_eq!(
            ToolError::Remote {
                status: 503,
                body: "busy".to_string()
            }
            .to_string(),
            "Error: 503 busy"
        );
    }

    #[test]
    fn test_execution_keeps_context_chain() {
        let err = anyhow!("connection refused").context("GET /v1/users/1");
        let tool_error = ToolError::execution("retrieving user by ID", err);
        assert_eq!(
            tool_error.to_string(),
            "Error while retrieving user by ID: GET /v1/users/1: connection refused"
        );
    }
}
