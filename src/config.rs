use std::net::{Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

const DEFAULT_DATABASE_URL: &str = "sqlite:clubs.db";
const DEFAULT_HOST: Ipv4Addr = Ipv4Addr::UNSPECIFIED;
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub host: Ipv4Addr,
    pub port: u16,
    /// tracing filter directive, from RUST_LOG
    pub log_filter: String,
}

impl Config {
    /// Read DATABASE_URL, HOST, PORT and RUST_LOG from the environment (after `.env` is loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
            std::env::var("RUST_LOG").ok(),
        )
    }

    pub fn from_vars(
        database_url: Option<String>,
        host: Option<String>,
        port: Option<String>,
        log_filter: Option<String>,
    ) -> Result<Self, ConfigError> {
        let host = match host {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => DEFAULT_HOST,
        };

        let port = match port {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            database_url: database_url.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host,
            port,
            log_filter: log_filter.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_vars(None, None, None, None).unwrap();

        assert_eq!(config.database_url, "sqlite:clubs.db");
        assert_eq!(config.addr(), "0.0.0.0:5000".parse().unwrap());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn explicit_values_win() {
        let config = Config::from_vars(
            Some("sqlite:/tmp/other.db".to_string()),
            Some("127.0.0.1".to_string()),
            Some("8080".to_string()),
            Some("club_hub_api=debug,tower_http=debug".to_string()),
        )
        .unwrap();

        assert_eq!(config.database_url, "sqlite:/tmp/other.db");
        assert_eq!(config.addr(), "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.log_filter, "club_hub_api=debug,tower_http=debug");
    }

    #[test]
    fn rejects_malformed_host_and_port() {
        let host = Config::from_vars(None, Some("localhost".to_string()), None, None);
        assert!(matches!(host, Err(ConfigError::InvalidHost(h)) if h == "localhost"));

        let port = Config::from_vars(None, None, Some("70000".to_string()), None);
        assert!(matches!(port, Err(ConfigError::InvalidPort(p)) if p == "70000"));
    }
}
