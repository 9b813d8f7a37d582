//! Static host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT {value:?}")]
    InvalidPort { value: String },

    /// `HOST` is set but is not an IP address.
    #[error("invalid HOST {value:?}")]
    InvalidHost { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding the built site (`index.html`, wasm, css).
    pub site_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 8080
    /// - `SITE_DIR`: default `client/dist` next to this crate
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `HOST` or `PORT` is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("HOST") {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost { value: raw })?,
            None => DEFAULT_HOST,
        };
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };
        let site_dir = lookup("SITE_DIR").map_or_else(default_site_dir, PathBuf::from);

        Ok(Self { host, port, site_dir })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn default_site_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/dist")
}
