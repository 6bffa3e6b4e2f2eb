use serde::{Deserialize, Serialize};

use super::tool::ToolCall;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// One turn of the conversation, in the shape the completion endpoint consumes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: Role,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    /// Only set on tool results, links back to the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    /// Only set on tool results, the tool that produced it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            tool_calls: None,
            tool_call_id: None,
            name: None,
        }
    }

    pub fn system(text: &str) -> Self {
        Self::new(Role::System, text)
    }

    pub fn user(text: &str) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: &str) -> Self {
        Self::new(Role::Assistant, text)
    }

    pub fn assistant_with_tool_calls(text: &str, tool_calls: Vec<ToolCall>) -> Self {
        Self {
            tool_calls: Some(tool_calls),
            ..Self::new(Role::Assistant, text)
        }
    }

    pub fn tool_result(tool_call_id: &str, name: &str, content: impl Into<String>) -> Self {
        Self {
            tool_call_id: Some(tool_call_id.to_string()),
            name: Some(name.to_string()),
            ..Self::new(Role::Tool, content)
        }
    }

    /// Requested tool calls, empty when there are none
    pub fn tool_calls(&self) -> &[ToolCall] {
        self.tool_calls.as_deref().unwrap_or_default()
    }

    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls().is_empty()
    }

    /// Short single-line preview for logs
    pub fn summary(&self, max_chars: usize) -> String {
        let preview: String = self.content.chars().take(max_chars).collect();
        let ellipsis = if self.content.chars().count() > max_chars {
            "..."
        } else {
            ""
        };
        format!("[{:?}]: {}{}", self.role, preview, ellipsis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_user_message() {
        let user_message = Message::user("abcd");
        assert_eq!(user_message.role, Role::User);
        assert_eq!(user_message.content, "abcd");
        assert!(!user_message.has_tool_calls());
    }

    #[test]
    fn test_tool_message_serialization() {
        let message = Message::tool_result("abc", "get_user_by_id", "X");
        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(
            value,
            json!({
                "role": "tool",
                "content": "X",
                "tool_call_id": "abc",
                "name": "get_user_by_id"
            })
        );
    }

    #[test]
    fn test_user_message_serialization_omits_tool_fields() {
        let value = serde_json::to_value(Message::user("hi")).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert_eq!(object["role"], "user");
        assert_eq!(object["content"], "hi");
        assert!(object.get("tool_call_id").is_none());
        assert!(object.get("name").is_none());
    }

    #[test]
    fn test_assistant_tool_calls_serialization() {
        let message = Message::assistant_with_tool_calls(
            "",
            vec![ToolCall::new("1", "get_user_by_id", r#"{"id": 42}"#)],
        );
        let value: Value = serde_json::to_value(&message).unwrap();

        assert_eq!(value["role"], "assistant");
        assert_eq!(value["content"], "");
        assert_eq!(value["tool_calls"][0]["id"], "1");
        assert_eq!(value["tool_calls"][0]["type"], "function");
        assert_eq!(value["tool_calls"][0]["function"]["name"], "get_user_by_id");
        assert_eq!(
            value["tool_calls"][0]["function"]["arguments"],
            r#"{"id": 42}"#
        );
    }

    #[test]
    fn test_deserialize_null_free_assistant() {
        let message: Message = serde_json::from_value(json!({
            "role": "assistant",
            "content": "Hello"
        }))
        .unwrap();
        assert_eq!(message, Message::assistant("Hello"));
    }

    #[test]
    fn test_summary_truncates() {
        let message = Message::user("abcdefgh");
        assert_eq!(message.summary(4), "[User]: abcd...");
        assert_eq!(message.summary(20), "[User]: abcdefgh");
    }
}
