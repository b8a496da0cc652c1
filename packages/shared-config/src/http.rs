//! HTTP listener configuration types

use crate::{get_env_or_default, parse_env, ConfigError, ConfigResult};

/// Address the HTTP transport binds to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Interface to listen on
    pub host: String,

    /// TCP port
    pub port: u16,
}

impl HttpConfig {
    /// Load HTTP configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        let config = Self {
            host: get_env_or_default("HTTP_HOST", "0.0.0.0"),
            port: parse_env("HTTP_PORT", 8080)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a configuration bound to the given port on all interfaces
    pub fn with_port(port: u16) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port,
        }
    }

    /// Reject blank hosts and the zero port
    pub fn validate(&self) -> ConfigResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "HTTP_HOST must not be blank".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(ConfigError::ValidationError(
                "HTTP_PORT must be between 1 and 65535".to_string(),
            ));
        }
        Ok(())
    }

    /// `host:port` form suitable for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host.trim(), self.port)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::with_port(8080)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_from_env() {
        temp_env::with_vars(
            [("HTTP_HOST", Some("127.0.0.1")), ("HTTP_PORT", Some("9090"))],
            || {
                let config = HttpConfig::from_env().unwrap();
                assert_eq!(config.bind_address(), "127.0.0.1:9090");
            },
        );
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        temp_env::with_vars(
            [("HTTP_HOST", None), ("HTTP_PORT", Some("not-a-port"))],
            || {
                let err = HttpConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("HTTP_PORT"));
            },
        );
    }

    #[test]
    fn test_zero_port_fails_validation() {
        let err = HttpConfig::with_port(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_blank_host_fails_validation() {
        let config = HttpConfig {
            host: "   ".to_string(),
            port: 8080,
        };
        assert!(config.validate().is_err());
    }
}
