use std::sync::Arc;

use serde_json::{json, Value};

use super::{models::UserSearch, UserClient};
use crate::tools::{error::ToolError, Arguments, Tool};

pub struct SearchUsersTool {
    client: Arc<UserClient>,
}

impl SearchUsersTool {
    pub fn new(client: Arc<UserClient>) -> Self {
        Self { client }
    }
}

impl Tool for SearchUsersTool {
    fn name(&self) -> &str {
        "search_users"
    }

    fn description(&self) -> &str {
        "Searches for users based on optional criteria like name, surname, email, or gender"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": {"type": "string", "description": "Filter users by first name (optional)"},
                "surname": {"type": "string", "description": "Filter users by last name (optional)"},
                "email": {"type": "string", "description": "Filter users by email address (optional)"},
                "gender": {"type": "string", "description": "Filter users by gender (optional)"}
            },
            "required": []
        })
    }

    fn call(&self, args: &Arguments) -> Result<String, ToolError> {
        let search = UserSearch::from_arguments(args)?;

        self.client
            .search_users(&search)
            .map_err(|e| ToolError::execution("searching users", e))
    }
}
