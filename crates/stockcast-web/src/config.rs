//! Server configuration.
//!
//! All knobs are read from the environment exactly once at startup and
//! collected into a plain struct; nothing downstream touches env vars.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use stockcast_core::Lookback;
use thiserror::Error;

/// Single origin the browser frontend is served from.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("STOCKCAST_PORT must be a valid port number: '{value}'")]
    InvalidPort { value: String },
    #[error("invalid STOCKCAST_HOST/STOCKCAST_PORT combination: '{value}'")]
    InvalidAddr { value: String },
    #[error("STOCKCAST_LOOKBACK is not a supported window: {0}")]
    InvalidLookback(#[from] stockcast_core::ValidationError),
}

/// Immutable server settings resolved at process start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub allowed_origin: String,
    pub lookback: Lookback,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("STOCKCAST_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("STOCKCAST_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            Err(_) => DEFAULT_PORT,
        };
        let raw_addr = format!("{host}:{port}");
        let addr: SocketAddr = raw_addr
            .parse()
            .map_err(|_| ConfigError::InvalidAddr { value: raw_addr })?;

        let allowed_origin = env::var("STOCKCAST_ALLOWED_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string());

        let lookback = match env::var("STOCKCAST_LOOKBACK") {
            Ok(value) => Lookback::from_str(&value)?,
            Err(_) => Lookback::default(),
        };

        Ok(Self {
            addr,
            allowed_origin,
            lookback,
        })
    }
}
