use super::base::{EnvConfig, EnvSource};
use anyhow::{anyhow, Result};

pub const DEFAULT_MAX_TOOL_ROUNDS: usize = 10;

/// Settings of the orchestration loop itself
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    /// How many model turns ending in tool calls one completion may take
    pub max_tool_rounds: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_tool_rounds: DEFAULT_MAX_TOOL_ROUNDS,
        }
    }
}

impl EnvConfig for AgentConfig {
    fn from_source(source: EnvSource) -> Result<Self> {
        let max_tool_rounds =
            Self::get_env_parsed(source, "AGENT_MAX_TOOL_ROUNDS", DEFAULT_MAX_TOOL_ROUNDS)?;
        if max_tool_rounds == 0 {
            return Err(anyhow!("AGENT_MAX_TOOL_ROUNDS must be at least 1"));
        }
        Ok(Self { max_tool_rounds })
    }
}
