use std::sync::Arc;

use serde_json::Value;

use super::{
    models::{user_create_schema, UserCreate},
    UserClient,
};
use crate::tools::{error::ToolError, Arguments, Tool};

pub struct CreateUserTool {
    client: Arc<UserClient>,
}

impl CreateUserTool {
    pub fn new(client: Arc<UserClient>) -> Self {
        Self { client }
    }
}

impl Tool for CreateUserTool {
    fn name(&self) -> &str {
        "add_user"
    }

    fn description(&self) -> &str {
        "Creates a new user in the system with the provided information"
    }

    fn input_schema(&self) -> Value {
        user_create_schema()
    }

    fn call(&self, args: &Arguments) -> Result<String, ToolError> {
        let user = UserCreate::from_arguments(args)?;

        self.client
            .add_user(&user)
            .map_err(|e| ToolError::execution("creating a new user", e))
    }
}
