use super::base::{EnvConfig, EnvSource};
use anyhow::Result;

pub const DEFAULT_USER_SERVICE_HOST: &str = "http://localhost:8041";

#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    pub host: String,
}

impl UserServiceConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_USER_SERVICE_HOST)
    }
}

impl EnvConfig for UserServiceConfig {
    fn from_source(source: EnvSource) -> Result<Self> {
        let host = Self::get_env(
            source,
            "USER_SERVICE_ENDPOINT",
            false,
            Some(DEFAULT_USER_SERVICE_HOST.to_string()),
        )?
        .unwrap_or_else(|| DEFAULT_USER_SERVICE_HOST.to_string());

        Ok(Self::new(host))
    }
}
