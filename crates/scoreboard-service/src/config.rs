//! Service configuration.

use std::net::{Ipv4Addr, SocketAddr};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 4000;

/// Default request body limit (100 KiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024;

/// Errors that make the configuration unusable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("{0} is not defined")]
    Missing(&'static str),

    /// A variable is set to a value that cannot be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Invalid {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Document store connection string (`MONGODB_URI`, required).
    pub mongodb_uri: String,

    /// Database name override (`MONGODB_DATABASE`).
    pub mongodb_database: Option<String>,

    /// Port to listen on (`PORT`, default: 4000).
    pub port: u16,

    /// CORS allowed origins (`CORS_ORIGINS`, default: "*").
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes (`MAX_BODY_BYTES`).
    pub max_body_bytes: usize,
}

impl ServiceConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if `MONGODB_URI` is unset, or
    /// `ConfigError::Invalid` if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Same as [`ServiceConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mongodb_uri = var("MONGODB_URI").ok_or(ConfigError::Missing("MONGODB_URI"))?;

        Ok(Self {
            mongodb_uri,
            mongodb_database: var("MONGODB_DATABASE"),
            port: parse_or("PORT", var("PORT"), DEFAULT_PORT)?,
            cors_origins: var("CORS_ORIGINS")
                .unwrap_or_else(|| "*".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            max_body_bytes: parse_or(
                "MAX_BODY_BYTES",
                var("MAX_BODY_BYTES"),
                DEFAULT_MAX_BODY_BYTES,
            )?,
        })
    }

    /// Address the HTTP listener binds to.
    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            mongodb_uri: "mongodb://localhost:27017/scoreboard".into(),
            mongodb_database: None,
            port: DEFAULT_PORT,
            cors_origins: vec!["*".into()],
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn missing_uri_is_an_error() {
        let err = ServiceConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("MONGODB_URI")));
        assert_eq!(err.to_string(), "MONGODB_URI is not defined");
    }

    #[test]
    fn empty_uri_is_treated_as_missing() {
        let err = ServiceConfig::from_lookup(lookup(&[("MONGODB_URI", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("MONGODB_URI")));
    }

    #[test]
    fn defaults_apply() {
        let config =
            ServiceConfig::from_lookup(lookup(&[("MONGODB_URI", "mongodb://db/scores")])).unwrap();

        assert_eq!(config.mongodb_uri, "mongodb://db/scores");
        assert_eq!(config.port, 4000);
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
        assert_eq!(config.max_body_bytes, 100 * 1024);
        assert!(config.mongodb_database.is_none());
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:4000");
    }

    #[test]
    fn overrides_apply() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("MONGODB_URI", "mongodb://db"),
            ("MONGODB_DATABASE", "arcade"),
            ("PORT", "5050"),
            ("CORS_ORIGINS", "http://a.test, http://b.test"),
            ("MAX_BODY_BYTES", "2048"),
        ]))
        .unwrap();

        assert_eq!(config.mongodb_database.as_deref(), Some("arcade"));
        assert_eq!(config.port, 5050);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.max_body_bytes, 2048);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = ServiceConfig::from_lookup(lookup(&[
            ("MONGODB_URI", "mongodb://db"),
            ("PORT", "not-a-port"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
    }
}
