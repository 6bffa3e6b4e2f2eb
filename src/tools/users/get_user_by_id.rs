use std::sync::Arc;

use serde_json::{json, Value};

use super::{parse_user_id, UserClient};
use crate::tools::{error::ToolError, Arguments, Tool};

pub struct GetUserByIdTool {
    client: Arc<UserClient>,
}

impl GetUserByIdTool {
    pub fn new(client: Arc<UserClient>) -> Self {
        Self { client }
    }
}

impl Tool for GetUserByIdTool {
    fn name(&self) -> &str {
        "get_user_by_id"
    }

    fn description(&self) -> &str {
        "Retrieves detailed information about a user by their ID"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "number",
                    "description": "The unique identifier (ID) of the user to retrieve"
                }
            },
            "required": ["id"]
        })
    }

    fn call(&self, args: &Arguments) -> Result<String, ToolError> {
        let id = parse_user_id(args.get("id"))?.ok_or_else(|| {
            ToolError::InvalidParameters("User ID is required but was not provided".to_string())
        })?;

        self.client
            .get_user(id)
            .map_err(|e| ToolError::execution("retrieving user by ID", e))
    }
}
