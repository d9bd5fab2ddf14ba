//! Configuration loaded from environment variables.

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Directory served for static assets.
    pub public_dir: PathBuf,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `PORT` | Listening port | `5000` |
    /// | `AGENT_BIND_HOST` | Bind address | `0.0.0.0` |
    /// | `AGENT_PUBLIC_DIR` | Static asset directory | `public` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("AGENT_BIND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").ok();
        let addr = parse_addr(&host, port.as_deref())?;

        let public_dir = env::var("AGENT_PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        Ok(Self { addr, public_dir })
    }
}

fn parse_addr(host: &str, port: Option<&str>) -> Result<SocketAddr, ConfigError> {
    let ip: IpAddr = host
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidHost(host.to_string()))?;

    let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidPort(value.to_string()))?,
        None => DEFAULT_PORT,
    };

    Ok(SocketAddr::new(ip, port))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid AGENT_BIND_HOST: {0}")]
    InvalidHost(String),

    #[error("Invalid PORT: {0}")]
    InvalidPort(String),
}
