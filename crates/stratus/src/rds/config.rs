//! RDS connection configuration.

use std::collections::HashMap;

use sqlx::mysql::MySqlConnectOptions;

use super::error::{RdsError, Result};

const REQUIRED_VARS: &[&str] = &["RDS_HOST", "RDS_USER", "RDS_PASSWORD", "RDS_DATABASE"];

/// Connection parameters for the RDS MySQL instance.
#[derive(Debug, Clone)]
pub struct RdsConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl RdsConfig {
    /// Builds a config from an already-validated variable map and a port
    /// string. Split out from [`from_env`](Self::from_env) so parsing is
    /// testable without touching the process environment.
    fn from_vars(vars: &HashMap<String, String>, port: &str) -> Result<Self> {
        Ok(Self {
            host: vars["RDS_HOST"].clone(),
            port: port
                .parse()
                .map_err(|_| RdsError::InvalidPort(port.to_string()))?,
            user: vars["RDS_USER"].clone(),
            password: vars["RDS_PASSWORD"].clone(),
            database: vars["RDS_DATABASE"].clone(),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// `RDS_HOST`, `RDS_USER`, `RDS_PASSWORD` and `RDS_DATABASE` are
    /// required and validated together before any connection attempt;
    /// `RDS_PORT` is optional (default: 3306).
    pub fn from_env() -> Result<Self> {
        let vars = stratus_core::env::require(REQUIRED_VARS)?;
        let port = stratus_core::env::var_or("RDS_PORT", "3306");
        Self::from_vars(&vars, &port)
    }

    /// Connection options for sqlx.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vars() -> HashMap<String, String> {
        HashMap::from([
            ("RDS_HOST".to_string(), "db.example.com".to_string()),
            ("RDS_USER".to_string(), "admin".to_string()),
            ("RDS_PASSWORD".to_string(), "secret".to_string()),
            ("RDS_DATABASE".to_string(), "app".to_string()),
        ])
    }

    #[test]
    fn test_default_port() {
        let config = RdsConfig::from_vars(&sample_vars(), "3306").unwrap();
        assert_eq!(config.port, 3306);
        assert_eq!(config.host, "db.example.com");
    }

    #[test]
    fn test_custom_port() {
        let config = RdsConfig::from_vars(&sample_vars(), "3307").unwrap();
        assert_eq!(config.port, 3307);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = RdsConfig::from_vars(&sample_vars(), "not-a-port").unwrap_err();
        assert!(matches!(err, RdsError::InvalidPort(_)));
    }
}
