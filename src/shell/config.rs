use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const ADDR_VAR: &str = "ASSET_EVENTS_ADDR";
pub const DATA_FILE_VAR: &str = "ASSET_EVENTS_DATA_FILE";
const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ASSET_EVENTS_ADDR is not a socket address: {value}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    /// Where events are persisted. `None` keeps them in memory only.
    pub data_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: raw_addr.clone(),
                source,
            })?;
        let data_file = lookup(DATA_FILE_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self { addr, data_file })
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.data_file, None);
    }

    #[rstest]
    fn it_should_read_both_variables() {
        let config = Config::from_lookup(lookup(&[
            (ADDR_VAR, "127.0.0.1:9000"),
            (DATA_FILE_VAR, "/var/lib/asset-events/events.json"),
        ]))
        .unwrap();
        assert_eq!(config.addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(
            config.data_file,
            Some(PathBuf::from("/var/lib/asset-events/events.json"))
        );
    }

    #[rstest]
    fn it_should_treat_a_blank_data_file_as_unset() {
        let config = Config::from_lookup(lookup(&[(DATA_FILE_VAR, "  ")])).unwrap();
        assert_eq!(config.data_file, None);
    }

    #[rstest]
    fn it_should_reject_a_malformed_address() {
        let result = Config::from_lookup(lookup(&[(ADDR_VAR, "localhost")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidAddr { ref value, .. }) if value == "localhost"
        ));
    }
}
