//! API configuration

use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Log level
    pub log_level: String,
    /// IANA timezone the business dates are interpreted in
    pub business_timezone: String,
    /// Seconds between expiration worker runs
    pub expiration_interval_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/car_insurance".to_string(),
            log_level: "info".to_string(),
            business_timezone: "Europe/Bucharest".to_string(),
            expiration_interval_secs: 10,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    ///
    /// `API_`-prefixed variables override the defaults. The conventional
    /// `DATABASE_URL` and `RUST_LOG` names are honored when the prefixed
    /// variants are absent.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default(
                "database_url",
                std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            )?
            .set_default(
                "log_level",
                std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            )?
            .set_default("business_timezone", defaults.business_timezone)?
            .set_default(
                "expiration_interval_secs",
                defaults.expiration_interval_secs as i64,
            )?
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.business_timezone, "Europe/Bucharest");
        assert_eq!(config.expiration_interval_secs, 10);
    }

    #[test]
    fn from_env_falls_back_to_defaults() {
        // No API_* variables are set in the test environment, so every field
        // that has no conventional fallback must come from the defaults
        let config = ApiConfig::from_env().expect("defaults satisfy every field");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.business_timezone, "Europe/Bucharest");
        assert_eq!(config.expiration_interval_secs, 10);
    }
}
