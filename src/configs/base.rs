use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use thiserror::Error;

/// A required variable was absent or blank
#[derive(Debug, Error, PartialEq)]
#[error("Environment variable '{0}' is required but not set.")]
pub struct MissingEnvVar(pub String);

/// Looks up a configuration value by key. `env::var` in production, a map in tests.
pub type EnvSource<'a> = &'a dyn Fn(&str) -> Option<String>;

pub trait EnvConfig {
    /// Build the configuration from an arbitrary key/value source
    fn from_source(source: EnvSource) -> Result<Self>
    where
        Self: Sized;

    /// Load configuration from environment variables
    fn from_env() -> Result<Self>
    where
        Self: Sized,
    {
        Self::from_source(&|key: &str| env::var(key).ok())
    }

    /// Helper function to get a variable with error handling. Blank values count as unset.
    fn get_env(
        source: EnvSource,
        key: &str,
        required: bool,
        default: Option<String>,
    ) -> Result<Option<String>> {
        match source(key).filter(|value| !value.trim().is_empty()) {
            Some(value) => Ok(Some(value)),
            None if !required => Ok(default),
            None => Err(MissingEnvVar(key.to_string()).into()),
        }
    }

    /// Like `get_env` for optional values that must parse into `T`
    fn get_env_parsed<T>(source: EnvSource, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match Self::get_env(source, key, false, None)? {
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map_err(|e| anyhow!("Environment variable '{}' is invalid: {}", key, e)),
            None => Ok(default),
        }
    }
}
