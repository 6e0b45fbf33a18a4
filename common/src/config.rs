//! Server configuration.
//!
//! [`ServerConfig`] is loaded once at startup and handed to the server entry point. There is no
//! global instance; tests build their own with [`ServerConfig::from_lookup`].

use std::env;
use std::net::{AddrParseError, IpAddr, SocketAddr};

/// Runtime configuration for the feedback API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub host: String,
    pub port: u16,
    pub max_body_kb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ServerConfig {
    /// Loads `.env` (if present) and reads configuration from the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Missing keys and unparsable numeric or boolean values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        Self {
            env: text("APP_ENV", "development"),
            project_name: text("PROJECT_NAME", "feedback-api"),
            log_level: text("LOG_LEVEL", "api=info,feedback=info"),
            log_dir: text("LOG_DIR", "logs"),
            log_file: text("LOG_FILE", "api.log"),
            log_to_stdout: lookup("LOG_TO_STDOUT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            host: text("HOST", "127.0.0.1"),
            port: lookup("PORT").and_then(|p| p.parse().ok()).unwrap_or(5000),
            max_body_kb: lookup("MAX_BODY_KB")
                .and_then(|k| k.parse().ok())
                .unwrap_or(50),
        }
    }

    /// The address to bind. `HOST` must be an IP literal, IPv4 or IPv6.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn max_body_bytes(&self) -> usize {
        self.max_body_kb.saturating_mul(1024)
    }
}
