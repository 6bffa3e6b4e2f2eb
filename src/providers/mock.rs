use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::errors::{AgentError, AgentResult};
use crate::providers::base::{Completion, FinishReason, Provider, Usage};
use crate::providers::types::{message::Message, tool::ToolSpec};

/// A mock provider that returns pre-configured completions for testing
#[derive(Clone, Default)]
pub struct MockProvider {
    responses: Arc<Mutex<VecDeque<AgentResult<Completion>>>>,
    requests: Arc<Mutex<Vec<Vec<Message>>>>,
}

impl MockProvider {
    pub fn new(responses: Vec<AgentResult<Completion>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            requests: Arc::default(),
        }
    }

    pub fn text(content: &str) -> AgentResult<Completion> {
        Ok(Completion::new(
            Message::assistant(content),
            FinishReason::Stop,
            Usage::default(),
        ))
    }

    pub fn tool_calls(message: Message) -> AgentResult<Completion> {
        Ok(Completion::new(
            message,
            FinishReason::ToolCalls,
            Usage::default(),
        ))
    }

    /// Message histories received so far, one entry per call
    pub fn requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().unwrap().clone()
    }
}

impl Provider for MockProvider {
    fn complete(&self, messages: &[Message], _tools: &[ToolSpec]) -> AgentResult<Completion> {
        self.requests.lock().unwrap().push(messages.to_vec());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(AgentError::MalformedResponse(
                    "No more mock responses".to_string(),
                ))
            })
    }
}
