//! Host configuration from the process environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` first, then reads `PORT` plus the console keys shared
//! with the browser bundle. The console part is handed to server rendering.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use admin_client::config::{ConfigError, ConsoleConfig};
use thiserror::Error;

pub const PORT_VAR: &str = "PORT";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ServerConfigError {
    #[error("PORT must be a TCP port number, got '{0}'")]
    InvalidPort(String),
    #[error(transparent)]
    Console(#[from] ConfigError),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub console: ConsoleConfig,
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns an error when a present value is malformed.
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// # Errors
    ///
    /// Returns an error when a present value is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(PORT_VAR).map(|raw| raw.trim().to_owned()).filter(|raw| !raw.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| ServerConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let console = ConsoleConfig::from_lookup(&lookup)?;
        Ok(Self { port, console })
    }
}
