use std::time::Duration;

use super::base::{EnvConfig, EnvSource, MissingEnvVar};
use anyhow::Result;

pub const API_KEY_VAR: &str = "DIAL_API_KEY";

pub const DEFAULT_DIAL_HOST: &str = "https://ai-proxy.lab.epam.com";
pub const DEFAULT_DEPLOYMENT: &str = "gpt-4o";
pub const DEFAULT_SEARCH_DEPLOYMENT: &str = "gemini-2.5-pro";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct DialProviderConfig {
    pub api_key: String,
    pub host: String,
    pub deployment: String,
    pub search_deployment: String,
    pub timeout: Duration,
}

impl DialProviderConfig {
    pub fn new(api_key: String, host: String) -> Self {
        Self {
            api_key,
            host,
            deployment: DEFAULT_DEPLOYMENT.to_string(),
            search_deployment: DEFAULT_SEARCH_DEPLOYMENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_deployment(mut self, deployment: impl Into<String>) -> Self {
        self.deployment = deployment.into();
        self
    }

    /// Chat completions URL of a deployment on this host
    pub fn completions_url(&self, deployment: &str) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions",
            self.host.trim_end_matches('/'),
            deployment
        )
    }
}

/// Whether a load failure was caused by the API key being unset
pub fn is_missing_api_key(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<MissingEnvVar>(), Some(MissingEnvVar(key)) if key == API_KEY_VAR)
}

impl EnvConfig for DialProviderConfig {
    fn from_source(source: EnvSource) -> Result<Self> {
        let api_key = Self::get_env(source, API_KEY_VAR, true, None)?
            .ok_or_else(|| anyhow::anyhow!("DIAL API key should be present"))?;

        let host = Self::get_env(
            source,
            "DIAL_ENDPOINT",
            false,
            Some(DEFAULT_DIAL_HOST.to_string()),
        )?
        .unwrap_or_else(|| DEFAULT_DIAL_HOST.to_string());

        let deployment = Self::get_env_parsed(
            source,
            "DIAL_DEPLOYMENT",
            DEFAULT_DEPLOYMENT.to_string(),
        )?;
        let search_deployment = Self::get_env_parsed(
            source,
            "DIAL_SEARCH_DEPLOYMENT",
            DEFAULT_SEARCH_DEPLOYMENT.to_string(),
        )?;
        let timeout_secs = Self::get_env_parsed(source, "DIAL_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            api_key,
            host,
            deployment,
            search_deployment,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
