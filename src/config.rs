//! Application configuration loaded from environment variables.

use std::net::{Ipv4Addr, SocketAddr};

use serde::Deserialize;

use crate::error::Result;

/// Application configuration loaded from environment variables.
///
/// Read once at startup and shared read-only with every handler.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Deployment environment name reported by `/info` (`ENV`).
    #[serde(default = "default_env")]
    pub env: String,

    /// HTTP listening port (`PORT`).
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_env() -> String {
    "development".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env: default_env(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Build configuration from explicit key/value pairs instead of the
    /// process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }

    /// Address the server binds to: all interfaces on the configured port.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
