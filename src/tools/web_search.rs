use anyhow::Result;
use serde_json::{json, Value};
use tracing::debug;

use super::{error::ToolError, Arguments, Tool};
use crate::configs::DialProviderConfig;
use crate::providers::dial::DeploymentClient;

const ACTION: &str = "searching the web";

/// Answers questions through a deployment grounded with Google Search
pub struct WebSearchTool {
    deployment: DeploymentClient,
}

impl WebSearchTool {
    pub fn new(config: &DialProviderConfig) -> Result<Self> {
        let deployment = DeploymentClient::new(config, &config.search_deployment)?;

        Ok(Self { deployment })
    }

    fn search(&self, request: &str) -> Result<String, ToolError> {
        let payload = json!({
            "messages": [{"role": "user", "content": request}],
            "tools": [{
                "type": "static_function",
                "static_function": {
                    "name": "google_search",
                    "description": "Grounding with Google Search",
                    "configuration": {}
                }
            }]
        });

        let (status, body) = self
            .deployment
            .post(&payload)
            .map_err(|e| ToolError::execution(ACTION, e))?;
        if !status.is_success() {
            return Err(ToolError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = serde_json::from_str(&body)
            .map_err(|e| ToolError::execution(ACTION, format!("response is not JSON: {}", e)))?;
        let answer = match data
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
        {
            Some(choice) => choice["message"]["content"]
                .as_str()
                .unwrap_or("No results found")
                .to_string(),
            None => "No search results found".to_string(),
        };
        debug!("Web search returned {} chars", answer.len());

        Ok(answer)
    }
}

impl Tool for WebSearchTool {
    fn name(&self) -> &str {
        "web_search_tool"
    }

    fn description(&self) -> &str {
        "Tool for searching the web to find current information, facts, or details about people, events, or topics"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "request": {
                    "type": "string",
                    "description": "The search query or question to search for on the web"
                }
            },
            "required": ["request"]
        })
    }

    fn call(&self, args: &Arguments) -> Result<String, ToolError> {
        let request = match args.get("request") {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Null) | None => {
                return Err(ToolError::InvalidParameters(
                    "Search request is required".to_string(),
                ))
            }
            Some(other) => other.to_string(),
        };

        self.search(&request)
    }
}
