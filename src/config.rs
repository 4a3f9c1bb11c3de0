use serde_derive::Deserialize;
use std::net::Ipv6Addr;
use std::path::Path;
use std::time::Duration;

use crate::error::ClientError;

pub const DEFAULT_PORT: u16 = 50051;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// One source of settings, command line or config file.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// seconds
    pub timeout: Option<u64>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
    pub address: Option<String>,
}

impl Config {
    pub fn new(host: impl Into<String>) -> Self {
        Config {
            host: host.into(),
            port: DEFAULT_PORT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            address: None,
        }
    }

    // cli > file > defaults
    pub fn resolve(cli: PartialConfig, file: PartialConfig) -> Result<Config, ClientError> {
        let host = cli
            .host
            .or(file.host)
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ClientError::Config("no daemon host given".to_string()))?;
        if host.contains(':') && host.parse::<Ipv6Addr>().is_err() {
            return Err(ClientError::Config(format!(
                "host {} must not carry a port, use --port instead",
                host
            )));
        }

        let port = match cli.port.or(file.port) {
            Some(0) => return Err(ClientError::Config("port must not be 0".to_string())),
            Some(p) => p,
            None => DEFAULT_PORT,
        };

        let timeout = match cli.timeout.or(file.timeout) {
            Some(0) => {
                return Err(ClientError::Config(
                    "timeout must be at least 1 second".to_string(),
                ))
            }
            Some(t) => Duration::from_secs(t),
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let address = cli
            .address
            .or(file.address)
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        Ok(Config {
            host,
            port,
            timeout,
            address,
        })
    }

    pub fn endpoint(&self) -> String {
        match self.host.parse::<Ipv6Addr>() {
            Ok(ip) => format!("http://[{}]:{}", ip, self.port),
            Err(_) => format!("http://{}:{}", self.host, self.port),
        }
    }
}

pub fn read_config(path: &Path) -> Result<PartialConfig, ClientError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ClientError::Config(format!("cannot read {}: {}", path.display(), e)))?;
    let config: PartialConfig = toml::from_str(&content)
        .map_err(|e| ClientError::Config(format!("cannot parse {}: {}", path.display(), e)))?;
    log::debug!("config file {}: {:?}", path.display(), config);
    Ok(config)
}
