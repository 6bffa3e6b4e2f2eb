use thiserror::Error;

/// Hard failures of a completion request. Everything below the tool boundary
/// is turned into message content instead and never shows up here.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgentError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Request to the completion endpoint failed: {0}")]
    Transport(String),

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),

    #[error("Input message too long. Message: {0}")]
    ContextLengthExceeded(String),

    #[error("Tool loop exceeded: no final answer after {0} tool rounds")]
    ToolLoopExceeded(usize),
}

impl From<reqwest::Error> for AgentError {
    fn from(err: reqwest::Error) -> Self {
        AgentError::Transport(err.to_string())
    }
}

pub type AgentResult<T> = Result<T, AgentError>;
