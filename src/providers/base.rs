use serde::{Deserialize, Serialize};

use super::types::{message::Message, tool::ToolSpec};
use crate::errors::AgentResult;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Usage {
    pub input_tokens: Option<i32>,
    pub output_tokens: Option<i32>,
    pub total_tokens: Option<i32>,
}

impl Usage {
    pub fn new(
        input_tokens: Option<i32>,
        output_tokens: Option<i32>,
        total_tokens: Option<i32>,
    ) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens,
        }
    }
}

/// Why the model stopped producing output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    ToolCalls,
    Length,
    ContentFilter,
    Other(String),
}

impl From<&str> for FinishReason {
    fn from(s: &str) -> Self {
        match s {
            "stop" => FinishReason::Stop,
            "tool_calls" => FinishReason::ToolCalls,
            "length" => FinishReason::Length,
            "content_filter" => FinishReason::ContentFilter,
            other => FinishReason::Other(other.to_string()),
        }
    }
}

/// One parsed answer of the completion endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub message: Message,
    pub finish_reason: FinishReason,
    pub usage: Usage,
}

impl Completion {
    pub fn new(message: Message, finish_reason: FinishReason, usage: Usage) -> Self {
        Self {
            message,
            finish_reason,
            usage,
        }
    }
}

/// A chat completion backend able to request tool calls
pub trait Provider: Send + Sync {
    /// Generate the next assistant turn for the given history and advertised tools
    fn complete(&self, messages: &[Message], tools: &[ToolSpec]) -> AgentResult<Completion>;
}
