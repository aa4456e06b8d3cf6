//! Server Configuration

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::{Result, ServerError};

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 3000);
const DEFAULT_STATIC_DIR: &str = "dist";

/// Static host configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// Directory holding the built bundle (`index.html`, wasm, js, css)
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    /// Read `BIND_ADDR` and `STATIC_DIR` from the environment
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup; unset keys take their defaults
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = match lookup("BIND_ADDR") {
            Some(addr) => addr
                .parse()
                .map_err(|source| ServerError::InvalidBindAddr { addr, source })?,
            None => DEFAULT_BIND_ADDR,
        };

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            bind_addr,
            static_dir,
        })
    }

    /// Path of the shell document inside the bundle
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = ServerConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.index_path(), PathBuf::from("dist/index.html"));
    }

    #[test]
    fn test_config_overrides() {
        let config = ServerConfig::from_vars(vars(&[
            ("BIND_ADDR", "127.0.0.1:8081"),
            ("STATIC_DIR", "/srv/checker"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8081".parse().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("/srv/checker"));
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = ServerConfig::from_vars(vars(&[("BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ServerError::InvalidBindAddr { ref addr, .. } if addr == "localhost"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
