//! Configuration types.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::ConfigError;

/// Top-level configuration for the site server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// HTTP server settings.
    pub web: WebConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Directory to serve static assets from instead of the bundled ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,
    /// Upper bound on request bodies.
    pub max_body_bytes: usize,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: None,
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl WebConfig {
    /// Address to bind. `host` must be an IP literal (IPv4 or IPv6, brackets
    /// optional) or `localhost`.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.host.trim();
        let unbracketed = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);

        let ip = if unbracketed.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            unbracketed
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidValue {
                    field: "web.host".to_string(),
                    reason: format!("'{}' is not an IP address", self.host),
                })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    pub level: String,
    /// Colourise output.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

impl SiteConfig {
    /// Reject values the server cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.web.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "web.host".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        self.web.socket_addr()?;
        if self.web.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "web.port".to_string(),
                reason: "must be between 1 and 65535".to_string(),
            });
        }
        if self.web.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "web.max_body_bytes".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!("unknown level '{}'", self.logging.level),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.web.socket_addr().unwrap().to_string(), "127.0.0.1:3000");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn port_zero_is_rejected() {
        let mut config = SiteConfig::default();
        config.web.port = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("web.port"));
    }

    #[test]
    fn blank_host_is_rejected() {
        let mut config = SiteConfig::default();
        config.web.host = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn ipv6_hosts_bind() {
        let mut config = SiteConfig::default();
        config.web.host = "::1".to_string();
        assert_eq!(config.web.socket_addr().unwrap().to_string(), "[::1]:3000");

        config.web.host = "[::]".to_string();
        config.web.port = 8080;
        assert_eq!(config.web.socket_addr().unwrap().to_string(), "[::]:8080");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn localhost_maps_to_loopback() {
        let mut config = SiteConfig::default();
        config.web.host = "localhost".to_string();
        assert_eq!(config.web.socket_addr().unwrap().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn non_ip_host_is_rejected() {
        let mut config = SiteConfig::default();
        config.web.host = "example.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "web.host"
        ));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let mut config = SiteConfig::default();
        config.logging.level = "chatty".to_string();
        assert!(config.validate().is_err());

        config.logging.level = "DEBUG".to_string();
        assert!(config.validate().is_ok());
    }
}
