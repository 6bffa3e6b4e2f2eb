use std::sync::Arc;

use serde_json::Value;

use super::{error::ToolError, ToolRegistry};
use crate::errors::AgentResult;

pub mod client;
pub mod create_user;
pub mod delete_user;
pub mod get_user_by_id;
pub mod models;
pub mod search_users;
pub mod update_user;

pub use client::UserClient;
pub use create_user::CreateUserTool;
pub use delete_user::DeleteUserTool;
pub use get_user_by_id::GetUserByIdTool;
pub use search_users::SearchUsersTool;
pub use update_user::UpdateUserTool;

/// Register the five user-management tools sharing one client
pub fn register_user_tools(registry: &mut ToolRegistry, client: Arc<UserClient>) -> AgentResult<()> {
    registry.register(GetUserByIdTool::new(client.clone()))?;
    registry.register(SearchUsersTool::new(client.clone()))?;
    registry.register(CreateUserTool::new(client.clone()))?;
    registry.register(UpdateUserTool::new(client.clone()))?;
    registry.register(DeleteUserTool::new(client))?;
    Ok(())
}

/// Coerce a user id given as a number or numeric string into an integer.
/// `None` is returned when the id is absent or null.
pub(crate) fn parse_user_id(value: Option<&Value>) -> Result<Option<i64>, ToolError> {
    let invalid = |detail: String| ToolError::InvalidParameters(format!("Invalid user ID format - {}", detail));

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            if let Some(id) = n.as_i64() {
                return Ok(Some(id));
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(Some(f as i64)),
                _ => Err(invalid(format!("expected an integer, got {}", n))),
            }
        }
        Some(Value::String(text)) => text
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|e| invalid(format!("'{}': {}", text, e))),
        Some(other) => Err(invalid(format!("expected a number, got {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id(Some(&json!(42))).unwrap(), Some(42));
        assert_eq!(parse_user_id(Some(&json!(42.0))).unwrap(), Some(42));
        assert_eq!(parse_user_id(Some(&json!(" 17 "))).unwrap(), Some(17));
        assert_eq!(parse_user_id(None).unwrap(), None);
        assert_eq!(parse_user_id(Some(&Value::Null)).unwrap(), None);
    }

    #[test]
    fn test_parse_user_id_rejects_garbage() {
        let err = parse_user_id(Some(&json!(4.5))).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Error: Invalid user ID format - expected an integer"));

        let err = parse_user_id(Some(&json!("abc"))).unwrap_err();
        assert!(err.to_string().starts_with("Error: Invalid user ID format - 'abc'"));

        assert!(parse_user_id(Some(&json!([1]))).is_err());
    }

    #[test]
    fn test_register_user_tools() {
        let client = UserClient::new(&Default::default()).unwrap();
        let mut registry = ToolRegistry::new();
        register_user_tools(&mut registry, Arc::new(client)).unwrap();

        assert_eq!(
            registry.names(),
            &[
                "get_user_by_id".to_string(),
                "search_users".to_string(),
                "add_user".to_string(),
                "update_user".to_string(),
                "delete_users".to_string()
            ]
        );
    }
}
