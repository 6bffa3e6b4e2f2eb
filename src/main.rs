use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use dial_agent::agent::Agent;
use dial_agent::configs::dial::is_missing_api_key;
use dial_agent::configs::{AgentConfig, DialProviderConfig, EnvConfig, UserServiceConfig};
use dial_agent::prompt::cliclack::CliclackPrompt;
use dial_agent::providers::dial::DialProvider;
use dial_agent::session::Session;
use dial_agent::tools::users::{register_user_tools, UserClient};
use dial_agent::tools::web_search::WebSearchTool;
use dial_agent::tools::ToolRegistry;

/// Chat with a user-management assistant that can call tools through DIAL.
/// Settings come from the environment, DIAL_API_KEY is required.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let dial_config = match DialProviderConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if is_missing_api_key(&e) {
                eprintln!("Please set your API key using:");
                eprintln!("  export DIAL_API_KEY='your-api-key-here'");
            }
            std::process::exit(1);
        }
    };
    let agent_config = AgentConfig::from_env()?;
    let user_config = UserServiceConfig::from_env()?;

    let mut registry = ToolRegistry::new();
    registry.register(WebSearchTool::new(&dial_config)?)?;
    register_user_tools(&mut registry, Arc::new(UserClient::new(&user_config)?))?;

    let provider = DialProvider::new(dial_config)?;
    let agent = Agent::new(Box::new(provider), registry).with_config(agent_config);

    let mut session = Session::new(agent, Box::new(CliclackPrompt::new()));
    session.start()
}
