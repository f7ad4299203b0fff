use std::env;
use std::net::{SocketAddr, ToSocketAddrs};

use thiserror::Error;
use validator::Validate;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_SERVICE_NAME: &str = "AIcode Backend";

/// Origins the editor extension's webviews are served from.
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost",
    "http://127.0.0.1:8000",
    "vscode-webview://*",
    "https://*.vscode-cdn.net",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
    #[error("Invalid settings: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("Cannot resolve bind address {0}")]
    Unresolvable(String),
}

#[derive(Debug, Clone, Validate)]
pub struct Settings {
    pub host: String,
    #[validate(range(min = 1, message = "Port must be non-zero"))]
    pub port: u16,
    #[validate(length(min = 1, message = "Service name cannot be empty"))]
    pub service_name: String,
    #[validate(length(min = 1, message = "At least one CORS origin is required"))]
    pub cors_origins: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

impl Settings {
    /// Reads `HOST`, `PORT`, `SERVICE_NAME` and `CORS_ORIGINS`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidVar {
                name: "PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => parse_origins(&raw),
            None => defaults.cors_origins,
        };

        let settings = Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            service_name: lookup("SERVICE_NAME").unwrap_or(defaults.service_name),
            cors_origins,
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let target = format!("{}:{}", self.host, self.port);
        target
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or(ConfigError::Unresolvable(target))
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
