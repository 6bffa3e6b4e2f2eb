use std::collections::HashMap;

use tracing::{info, warn};

use super::{error::ToolError, Arguments, Tool};
use crate::errors::{AgentError, AgentResult};
use crate::providers::types::tool::{ToolCall, ToolSpec};
use crate::providers::utils::is_valid_function_name;

/// Name-keyed set of tools, advertised in registration order
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
    order: Vec<String>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: Tool + 'static>(&mut self, tool: T) -> AgentResult<()> {
        let name = tool.name().to_string();
        if !is_valid_function_name(&name) {
            return Err(AgentError::Config(format!(
                "Invalid tool name '{}', it must match [a-zA-Z0-9_-]+",
                name
            )));
        }
        if self.tools.contains_key(&name) {
            return Err(AgentError::Config(format!("Duplicate tool name: {}", name)));
        }

        self.order.push(name.clone());
        self.tools.insert(name, Box::new(tool));
        Ok(())
    }

    pub fn schema_list(&self) -> Vec<ToolSpec> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| tool.spec())
            .collect()
    }

    /// Run a tool by name. Always yields text for the model, even on failure.
    pub fn dispatch(&self, name: &str, args: &Arguments) -> String {
        let Some(tool) = self.tools.get(name) else {
            warn!("Model requested unknown tool {}", name);
            return ToolError::ToolNotFound(name.to_string()).to_string();
        };

        info!("Executing tool {}", name);
        match tool.call(args) {
            Ok(output) => output,
            Err(e) => {
                warn!("Tool {} failed: {}", name, e);
                e.to_string()
            }
        }
    }

    /// Parse the raw arguments of a requested call and dispatch it
    pub fn execute_call(&self, call: &ToolCall) -> String {
        match call.parse_arguments() {
            Ok(args) => self.dispatch(call.name(), &args),
            Err(e) => {
                warn!("Bad arguments for {}: {}", call.name(), e);
                e.to_string()
            }
        }
    }

    pub fn names(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
