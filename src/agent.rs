use tracing::{debug, error, info, warn};

use crate::configs::AgentConfig;
use crate::errors::{AgentError, AgentResult};
use crate::providers::base::{Completion, FinishReason, Provider};
use crate::providers::types::{conversation::Conversation, message::Message};
use crate::tools::ToolRegistry;

/// Where one completion request currently stands
enum LoopState {
    AwaitingModel,
    ExecutingTools(Message),
    Done(Message),
}

/// Drives the model through tool calls until it produces a final answer
pub struct Agent {
    provider: Box<dyn Provider>,
    registry: ToolRegistry,
    config: AgentConfig,
}

impl Agent {
    pub fn new(provider: Box<dyn Provider>, registry: ToolRegistry) -> Self {
        Self {
            provider,
            registry,
            config: AgentConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AgentConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Produce the assistant's final answer to the conversation.
    ///
    /// Intermediate assistant turns and tool results are appended to
    /// `conversation`; the returned answer is not. If the endpoint fails the
    /// conversation is restored to its length before the call. When the tool
    /// round limit trips, the turns already executed are kept.
    pub fn complete(&self, conversation: &mut Conversation) -> AgentResult<Message> {
        let checkpoint = conversation.len();

        match self.run(conversation) {
            Err(AgentError::ToolLoopExceeded(rounds)) => {
                warn!("No final answer after {} tool rounds", rounds);
                Err(AgentError::ToolLoopExceeded(rounds))
            }
            Err(e) => {
                error!("Completion failed: {}", e);
                conversation.rollback_to(checkpoint);
                Err(e)
            }
            ok => ok,
        }
    }

    fn run(&self, conversation: &mut Conversation) -> AgentResult<Message> {
        let tools = self.registry.schema_list();
        let mut rounds = 0;
        let mut state = LoopState::AwaitingModel;

        loop {
            state = match state {
                LoopState::AwaitingModel => {
                    let completion = self.provider.complete(conversation.messages(), &tools)?;
                    self.classify(completion)?
                }
                LoopState::ExecutingTools(message) => {
                    rounds += 1;
                    if rounds > self.config.max_tool_rounds {
                        return Err(AgentError::ToolLoopExceeded(self.config.max_tool_rounds));
                    }

                    debug!("Tool round {}", rounds);
                    let results = self.execute_tools(&message);
                    conversation.add_message(message);
                    conversation.extend(results);
                    LoopState::AwaitingModel
                }
                LoopState::Done(message) => return Ok(message),
            };
        }
    }

    fn classify(&self, completion: Completion) -> AgentResult<LoopState> {
        let Completion {
            message,
            finish_reason,
            ..
        } = completion;

        match finish_reason {
            FinishReason::ToolCalls if !message.has_tool_calls() => Err(
                AgentError::MalformedResponse(
                    "Finish reason is tool_calls but no tool calls were returned".to_string(),
                ),
            ),
            FinishReason::ToolCalls => Ok(LoopState::ExecutingTools(message)),
            FinishReason::Stop => Ok(LoopState::Done(Self::final_answer(message))),
            other => {
                warn!("Unexpected finish reason {:?}, returning content as is", other);
                Ok(LoopState::Done(Self::final_answer(message)))
            }
        }
    }

    /// A final answer must not carry calls that will never get a result
    fn final_answer(mut message: Message) -> Message {
        if message.has_tool_calls() {
            warn!(
                "Dropping {} tool calls from a final answer",
                message.tool_calls().len()
            );
        }
        message.tool_calls = None;
        message
    }

    /// Run every requested call in order, one tool-result message per call
    fn execute_tools(&self, message: &Message) -> Vec<Message> {
        message
            .tool_calls()
            .iter()
            .map(|call| {
                info!("Model called {} (id {})", call.name(), call.id);
                let output = self.registry.execute_call(call);
                Message::tool_result(&call.id, call.name(), output)
            })
            .collect()
    }
}
