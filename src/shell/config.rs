// Service configuration read from the environment.
//
// Variables
// - ACCOUNTS_BIND_ADDR: socket address to listen on. Default 0.0.0.0:8080.
// - ACCOUNTS_CONFLICT_RETRIES: how often a command is re-run after losing a
//   write race. Default 0, which surfaces every conflict to the client.

use crate::shared::application::command_handler::RetryPolicy;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "ACCOUNTS_BIND_ADDR";
pub const CONFLICT_RETRIES_VAR: &str = "ACCOUNTS_CONFLICT_RETRIES";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub retry_policy: RetryPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = parse_var(BIND_ADDR_VAR, lookup(BIND_ADDR_VAR), DEFAULT_BIND_ADDR)?;
        let max_retries = parse_var(CONFLICT_RETRIES_VAR, lookup(CONFLICT_RETRIES_VAR), "0")?;
        Ok(Self {
            bind_addr,
            retry_policy: RetryPolicy::new(max_retries),
        })
    }
}

fn parse_var<T: FromStr>(
    name: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<T, ConfigError> {
    let value = value.unwrap_or_else(|| default.to_string());
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
