pub mod agent;
pub mod base;
pub mod dial;
pub mod user_service;

pub use agent::AgentConfig;
pub use base::{EnvConfig, MissingEnvVar};
pub use dial::DialProviderConfig;
pub use user_service::UserServiceConfig;
