use std::sync::Arc;

use serde_json::{json, Value};

use super::{parse_user_id, UserClient};
use crate::tools::{error::ToolError, Arguments, Tool};

pub struct DeleteUserTool {
    client: Arc<UserClient>,
}

impl DeleteUserTool {
    pub fn new(client: Arc<UserClient>) -> Self {
        Self { client }
    }
}

impl Tool for DeleteUserTool {
    fn name(&self) -> &str {
        "delete_users"
    }

    fn description(&self) -> &str {
        "Deletes a user from the system by their ID"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "number",
                    "description": "The ID of the user to delete"
                }
            },
            "required": ["id"]
        })
    }

    fn call(&self, args: &Arguments) -> Result<String, ToolError> {
        let id = parse_user_id(args.get("id"))?.ok_or_else(|| {
            ToolError::InvalidParameters("User ID is required for deletion".to_string())
        })?;

        self.client
            .delete_user(id)
            .map_err(|e| ToolError::execution("deleting user by id", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::UserServiceConfig;

    fn tool_for(server: &mockito::Server) -> DeleteUserTool {
        let client = UserClient::new(&UserServiceConfig::new(server.url())).unwrap();
        DeleteUserTool::new(Arc::new(client))
    }

    #[test]
    fn test_delete_user() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("DELETE", "/v1/users/8")
            .with_status(200)
            .with_body("{}")
            .create();

        let args = json!({"id": 8});
        let output = tool_for(&server)
            .call(args.as_object().unwrap())
            .unwrap();

        mock.assert();
        assert_eq!(output, "User successfully deleted");
    }

    #[test]
    fn test_missing_id() {
        let server = mockito::Server::new();
        let err = tool_for(&server).call(&Arguments::new()).unwrap_err();
        assert_eq!(err.to_string(), "Error: User ID is required for deletion");
    }

    #[test]
    fn test_unknown_user() {
        let mut server = mockito::Server::new();
        server
            .mock("DELETE", "/v1/users/8")
            .with_status(404)
            .with_body("not found")
            .create();

        let args = json!({"id": 8});
        let err = tool_for(&server)
            .call(args.as_object().unwrap())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error while deleting user by id: HTTP 404: not found"
        );
    }
}
