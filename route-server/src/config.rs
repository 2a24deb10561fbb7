//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::source::DataSource;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "ROUTE_SERVER_ADDR";

/// Environment variable holding the path of the edge-list file.
pub const DATA_FILE_VAR: &str = "ROUTE_DATA_FILE";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The listen address did not parse
    #[error("invalid {var}: {value:?} is not a socket address")]
    InvalidAddr { var: &'static str, value: String },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Edge-list file loaded at startup. The built-in list is used when unset.
    pub data_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset or blank variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let addr = match get(ADDR_VAR) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr {
                    var: ADDR_VAR,
                    value,
                })?,
            None => defaults.addr,
        };

        let data_file = get(DATA_FILE_VAR).map(PathBuf::from);

        Ok(Self { addr, data_file })
    }

    /// The source of the startup graph.
    pub fn data_source(&self) -> DataSource {
        match &self.data_file {
            Some(path) => DataSource::File(path.clone()),
            None => DataSource::Default,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.data_file, None);
        assert_eq!(config.data_source(), DataSource::Default);
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn custom_config() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (ADDR_VAR, "0.0.0.0:8080"),
            (DATA_FILE_VAR, "/srv/routes.txt"),
        ]))
        .unwrap();

        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.data_file, Some(PathBuf::from("/srv/routes.txt")));
        assert_eq!(
            config.data_source(),
            DataSource::File(PathBuf::from("/srv/routes.txt"))
        );
    }

    #[test]
    fn blank_values_are_unset() {
        let lookup = lookup_from(&[(ADDR_VAR, " "), (DATA_FILE_VAR, "")]);
        let config = ServerConfig::from_lookup(lookup).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn invalid_addr() {
        let err = ServerConfig::from_lookup(lookup_from(&[(ADDR_VAR, "localhost")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid ROUTE_SERVER_ADDR: \"localhost\" is not a socket address"
        );
    }
}
