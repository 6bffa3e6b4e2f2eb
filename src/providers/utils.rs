use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{json, Value};
use tracing::warn;

use super::base::{Completion, FinishReason, Usage};
use super::types::{
    message::{Message, Role},
    tool::{ToolCall, ToolSpec},
};
use crate::errors::{AgentError, AgentResult};

lazy_static! {
    static ref FUNCTION_NAME: Regex = Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// Build the `{messages, tools}` request body; `tools` is left out when there are none
pub fn build_payload(messages: &[Message], tools: &[ToolSpec]) -> Value {
    let mut payload = json!({ "messages": messages });

    if !tools.is_empty() {
        payload["tools"] = json!(tools_to_dial_spec(tools));
    }

    payload
}

/// Convert tool specs to the function-calling format. Names are unique
/// because the registry refuses duplicates at registration.
pub fn tools_to_dial_spec(tools: &[ToolSpec]) -> Vec<Value> {
    tools.iter().map(ToolSpec::to_function_spec).collect()
}

/// Convert a completion response body to a [`Completion`] built from its first choice
pub fn response_to_completion(response: &Value) -> AgentResult<Completion> {
    let choice = response
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .ok_or_else(|| AgentError::MalformedResponse("No choices in response".to_string()))?;

    let reply = choice.get("message").ok_or_else(|| {
        AgentError::MalformedResponse("First choice carries no message".to_string())
    })?;

    let content = reply
        .get("content")
        .and_then(|c| c.as_str())
        .unwrap_or_default();

    let tool_calls = match reply.get("tool_calls") {
        None | Some(Value::Null) => Vec::new(),
        Some(calls) => serde_json::from_value::<Vec<ToolCall>>(calls.clone()).map_err(|e| {
            AgentError::MalformedResponse(format!("Could not read tool calls: {}", e))
        })?,
    };

    for call in &tool_calls {
        if !is_valid_function_name(call.name()) {
            warn!(
                "The provided function name '{}' had invalid characters, it must match this regex [a-zA-Z0-9_-]+",
                call.name()
            );
        }
    }

    let finish_reason = match choice.get("finish_reason").and_then(|f| f.as_str()) {
        Some(reason) => FinishReason::from(reason),
        None if !tool_calls.is_empty() => FinishReason::ToolCalls,
        None => FinishReason::Stop,
    };

    let message = if tool_calls.is_empty() {
        Message::new(Role::Assistant, content)
    } else {
        Message::assistant_with_tool_calls(content, tool_calls)
    };

    Ok(Completion::new(message, finish_reason, get_usage(response)))
}

/// Token counts of a response; missing values stay `None`
pub fn get_usage(data: &Value) -> Usage {
    let Some(usage) = data.get("usage") else {
        return Usage::default();
    };

    let input_tokens = token_count(usage, "prompt_tokens");
    let output_tokens = token_count(usage, "completion_tokens");
    let total_tokens =
        token_count(usage, "total_tokens").or(match (input_tokens, output_tokens) {
            (Some(input), Some(output)) => input.checked_add(output),
            _ => None,
        });

    Usage::new(input_tokens, output_tokens, total_tokens)
}

/// Counts that are negative or do not fit an `i32` are treated as missing
fn token_count(usage: &Value, key: &str) -> Option<i32> {
    usage
        .get(key)
        .and_then(|v| v.as_i64())
        .and_then(|v| i32::try_from(v).ok())
        .filter(|v| *v >= 0)
}

pub fn is_valid_function_name(name: &str) -> bool {
    FUNCTION_NAME.is_match(name)
}

pub fn check_context_length_error(error: &Value) -> Option<AgentError> {
    let code = error.get("code")?.as_str()?;
    if code == "context_length_exceeded" || code == "string_above_max_length" {
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown error")
            .to_string();
        Some(AgentError::ContextLengthExceeded(message))
    } else {
        None
    }
}
