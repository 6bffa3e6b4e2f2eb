use anyhow::Result;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, error};

use super::{
    base::{Completion, Provider},
    types::{message::Message, tool::ToolSpec},
    utils::{build_payload, check_context_length_error, response_to_completion},
};
use crate::configs::DialProviderConfig;
use crate::errors::{AgentError, AgentResult};

/// Authenticated JSON requests to one DIAL deployment
pub struct DeploymentClient {
    client: Client,
    url: String,
    api_key: String,
}

impl DeploymentClient {
    pub fn new(config: &DialProviderConfig, deployment: &str) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            url: config.completions_url(deployment),
            api_key: config.api_key.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Status and raw body of the reply. Only transport failures are errors.
    pub fn post(&self, payload: &Value) -> reqwest::Result<(StatusCode, String)> {
        let response = self
            .client
            .post(&self.url)
            .header("api-key", &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        Ok((status, body))
    }
}

/// Chat completions against a DIAL deployment
pub struct DialProvider {
    deployment: DeploymentClient,
}

impl DialProvider {
    pub fn new(config: DialProviderConfig) -> Result<Self> {
        let deployment = DeploymentClient::new(&config, &config.deployment)?;

        Ok(Self { deployment })
    }

    fn post(&self, payload: &Value) -> AgentResult<(StatusCode, Value)> {
        let (status, body) = self.deployment.post(payload)?;

        if !status.is_success() {
            error!(
                "Completion request to {} failed with {}",
                self.deployment.url(),
                status
            );
            return Err(AgentError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let value = serde_json::from_str(&body).map_err(|e| {
            AgentError::MalformedResponse(format!("Response body is not JSON: {}", e))
        })?;
        Ok((status, value))
    }
}

impl Provider for DialProvider {
    fn complete(&self, messages: &[Message], tools: &[ToolSpec]) -> AgentResult<Completion> {
        let payload = build_payload(messages, tools);

        let tail = messages.len().saturating_sub(3);
        for message in &messages[tail..] {
            debug!("Sending {}", message.summary(120));
        }

        let (status, response) = self.post(&payload)?;

        if let Some(err) = response.get("error") {
            if let Some(too_long) = check_context_length_error(err) {
                return Err(too_long);
            }
            return Err(AgentError::Api {
                status: status.as_u16(),
                body: err.to_string(),
            });
        }

        let completion = response_to_completion(&response)?;
        debug!(
            "Finish reason {:?}, usage {:?}",
            completion.finish_reason, completion.usage
        );

        Ok(completion)
    }
}
