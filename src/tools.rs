use serde_json::{Map, Value};

use crate::providers::types::tool::ToolSpec;

pub mod error;
pub mod registry;
pub mod users;
pub mod web_search;

pub use error::ToolError;
pub use registry::ToolRegistry;

/// Parsed arguments of a tool call
pub type Arguments = Map<String, Value>;

/// A capability the model can invoke by name
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON schema of the accepted arguments
    fn input_schema(&self) -> Value;

    /// Run the tool. Errors are rendered into the tool-result message by the registry.
    fn call(&self, args: &Arguments) -> Result<String, ToolError>;

    fn spec(&self) -> ToolSpec {
        ToolSpec::new(self.name(), self.description(), self.input_schema())
    }
}
