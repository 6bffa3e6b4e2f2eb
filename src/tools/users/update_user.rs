use std::sync::Arc;

use serde_json::{json, Value};

use super::{
    models::{user_properties, UserUpdate},
    parse_user_id, UserClient,
};
use crate::tools::{error::ToolError, Arguments, Tool};

const ACTION: &str = "updating user";

pub struct UpdateUserTool {
    client: Arc<UserClient>,
}

impl UpdateUserTool {
    pub fn new(client: Arc<UserClient>) -> Self {
        Self { client }
    }
}

impl Tool for UpdateUserTool {
    fn name(&self) -> &str {
        "update_user"
    }

    fn description(&self) -> &str {
        "Updates an existing user's information by their ID"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "number",
                    "description": "User ID that should be updated"
                },
                "new_info": {
                    "type": "object",
                    "description": "New information to update for the user",
                    "properties": user_properties(),
                    "required": []
                }
            },
            "required": ["id", "new_info"]
        })
    }

    fn call(&self, args: &Arguments) -> Result<String, ToolError> {
        let id = parse_user_id(args.get("id"))?
            .ok_or_else(|| ToolError::InvalidParameters("User ID is required".to_string()))?;

        let update = match args.get("new_info") {
            None | Some(Value::Null) => UserUpdate::default(),
            Some(info) => UserUpdate::from_value(info)
                .map_err(|e| ToolError::execution(ACTION, format!("invalid new_info - {}", e)))?,
        };

        self.client
            .update_user(id, &update)
            .map_err(|e| ToolError::execution(ACTION, e))
    }
}
