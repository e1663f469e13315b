//! Environment-driven configuration
//!
//! All runtime configuration is read from the process environment once at
//! startup (a `.env` file is honored in `main`). There is no reload surface.

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

/// Default listening port.
const DEFAULT_PORT: u16 = 11000;

/// Default bind address (localhost only).
const DEFAULT_BIND: &str = "127.0.0.1";

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be set to a non-empty value")]
    Missing { name: &'static str },

    #[error("{name} is not a valid port number: '{value}'")]
    InvalidPort { name: &'static str, value: String },

    #[error("invalid bind address: '{value}'")]
    InvalidBind { value: String },
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string (`MONGO_URI`, required)
    pub mongo_uri: String,
    /// Bind address (`BIND`, default 127.0.0.1)
    pub bind: String,
    /// Listening port (`PORT`, default 11000)
    pub port: u16,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("MONGO_URI").ok(),
            env::var("BIND").ok(),
            env::var("PORT").ok(),
        )
    }

    fn from_vars(
        mongo_uri: Option<String>,
        bind: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mongo_uri = match mongo_uri {
            Some(uri) if !uri.trim().is_empty() => uri,
            _ => return Err(ConfigError::Missing { name: "MONGO_URI" }),
        };

        let port = match port {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                name: "PORT",
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            mongo_uri,
            bind: bind.unwrap_or_else(|| DEFAULT_BIND.to_string()),
            port,
        })
    }

    /// Resolve the socket address to listen on.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.bind, self.port);
        addr.parse()
            .map_err(|_| ConfigError::InvalidBind { value: addr })
    }
}
