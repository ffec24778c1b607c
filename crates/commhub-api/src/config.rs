//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 9000;
const DEFAULT_ORDER_SERVICE_URL: &str = "http://localhost:8001";
const DEFAULT_DELIVERY_SERVICE_URL: &str = "http://localhost:8002";
const DEFAULT_HEALTH_PROBE_TIMEOUT_MS: u64 = 2000;

/// Runtime configuration of the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Base URL of the Order service.
    pub order_service_url: String,
    /// Base URL of the Delivery service.
    pub delivery_service_url: String,
    /// Timeout applied to collaborator health probes only.
    pub health_probe_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            order_service_url: DEFAULT_ORDER_SERVICE_URL.to_owned(),
            delivery_service_url: DEFAULT_DELIVERY_SERVICE_URL.to_owned(),
            health_probe_timeout: Duration::from_millis(DEFAULT_HEALTH_PROBE_TIMEOUT_MS),
        }
    }
}

impl Config {
    /// Reads `HOST`, `PORT`, `ORDER_SERVICE_URL`, `DELIVERY_SERVICE_URL` and
    /// `HEALTH_PROBE_TIMEOUT_MS`, falling back to defaults for unset ones.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an unparsable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => defaults.port,
        };

        let health_probe_timeout = match lookup("HEALTH_PROBE_TIMEOUT_MS") {
            Some(raw) => Duration::from_millis(raw.parse().map_err(|e| {
                AppError::Config(format!("HEALTH_PROBE_TIMEOUT_MS must be milliseconds: {e}"))
            })?),
            None => defaults.health_probe_timeout,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            order_service_url: lookup("ORDER_SERVICE_URL").unwrap_or(defaults.order_service_url),
            delivery_service_url: lookup("DELIVERY_SERVICE_URL")
                .unwrap_or(defaults.delivery_service_url),
            health_probe_timeout,
        })
    }

    /// Socket address built from `host` and `port`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the combination is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_uses_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.port, 9000);
        assert_eq!(config.order_service_url, "http://localhost:8001");
        assert_eq!(config.delivery_service_url, "http://localhost:8002");
        assert_eq!(config.health_probe_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_from_lookup_reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9100"),
            ("ORDER_SERVICE_URL", "http://orders:8001"),
            ("DELIVERY_SERVICE_URL", "http://delivery:8002"),
            ("HEALTH_PROBE_TIMEOUT_MS", "500"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr().unwrap(), "127.0.0.1:9100".parse::<SocketAddr>().unwrap());
        assert_eq!(config.order_service_url, "http://orders:8001");
        assert_eq!(config.delivery_service_url, "http://delivery:8002");
        assert_eq!(config.health_probe_timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_from_lookup_rejects_bad_port() {
        let result = Config::from_lookup(lookup_from(&[("PORT", "ninety")]));

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_bind_addr_rejects_bad_host() {
        let config = Config {
            host: "not a host".to_owned(),
            ..Config::default()
        };

        assert!(matches!(config.bind_addr(), Err(AppError::Config(_))));
    }
}
