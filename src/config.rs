use std::env;
use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_RATE_SERVICE_URL: &str = "http://api.currencylayer.com";

/// Process configuration, read once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket the HTTP chat transport listens on.
    pub bind_addr: SocketAddr,
    /// Base URL of the quote service.
    pub rate_service_url: String,
    /// Credential for the quote service.
    pub access_key: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
    #[error("environment variable {name} has an invalid value: {value}")]
    InvalidVar { name: &'static str, value: String },
}

impl AppConfig {
    /// Reads configuration from the environment (a dotenv file is loaded
    /// beforehand in `main`).
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr.parse().map_err(|_| ConfigError::InvalidVar {
            name: "BIND_ADDR",
            value: bind_addr.clone(),
        })?;

        let rate_service_url = env::var("CURRENCYLAYER_URL")
            .unwrap_or_else(|_| DEFAULT_RATE_SERVICE_URL.to_string());

        let access_key = env::var("CURRENCYLAYER_ACCESS_KEY")
            .map_err(|_| ConfigError::MissingVar("CURRENCYLAYER_ACCESS_KEY"))?;

        Ok(Self {
            bind_addr,
            rate_service_url,
            access_key,
        })
    }
}
