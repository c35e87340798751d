//! Configuration management for the nodegraph service.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (`NEO4J_URI`, `NEO4J_USER`, `NEO4J_PASSWORD`, `PORT`, ...)
//! 2. Config file (`nodegraph.toml` unless another prefix is given)
//! 3. Defaults
//!
//! The three Neo4j connection settings have no default; loading fails when
//! any of them is absent.

use std::fmt;

use serde::Deserialize;

use crate::error::NodegraphError;

/// Service configuration.
#[derive(Clone, Deserialize)]
pub struct AppConfig {
    /// Bolt URI of the Neo4j server, e.g. `bolt://localhost:7687`.
    pub neo4j_uri: String,

    pub neo4j_user: String,

    pub neo4j_password: String,

    /// HTTP listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound on pooled Bolt connections held by the driver.
    #[serde(default = "default_max_connections")]
    pub neo4j_max_connections: u32,

    /// Rows fetched per Bolt PULL.
    #[serde(default = "default_fetch_size")]
    pub neo4j_fetch_size: usize,
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    16
}

fn default_fetch_size() -> usize {
    256
}

impl AppConfig {
    /// Load from an optional config file named `file_prefix` plus the
    /// process environment.
    pub fn load(file_prefix: &str) -> Result<Self, NodegraphError> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(environment())
            .build()?;

        Self::from_config(cfg)
    }

    /// Deserialize an already-built configuration.
    pub fn from_config(cfg: config::Config) -> Result<Self, NodegraphError> {
        let app: AppConfig = cfg.try_deserialize()?;
        tracing::debug!(uri = %app.neo4j_uri, port = app.port, "Configuration loaded");
        Ok(app)
    }
}

/// Unprefixed environment source: `NEO4J_URI` becomes `neo4j_uri`.
///
/// Values stay strings. Numeric fields are converted when deserialized, so
/// credentials such as `0123` are never reinterpreted as numbers.
fn environment() -> config::Environment {
    config::Environment::default()
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("neo4j_uri", &self.neo4j_uri)
            .field("neo4j_user", &self.neo4j_user)
            .field("neo4j_password", &"<redacted>")
            .field("port", &self.port)
            .field("neo4j_max_connections", &self.neo4j_max_connections)
            .field("neo4j_fetch_size", &self.neo4j_fetch_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(src: &str) -> Result<AppConfig, NodegraphError> {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(src, config::FileFormat::Toml))
            .build()?;
        AppConfig::from_config(cfg)
    }

    #[test]
    fn test_defaults_applied() {
        let config = from_toml(
            r#"
            neo4j_uri = "bolt://db:7687"
            neo4j_user = "neo4j"
            neo4j_password = "secret"
            "#,
        )
        .unwrap();

        assert_eq!(config.neo4j_uri, "bolt://db:7687");
        assert_eq!(config.port, 3000);
        assert_eq!(config.neo4j_max_connections, 16);
        assert_eq!(config.neo4j_fetch_size, 256);
    }

    #[test]
    fn test_port_override() {
        let config = from_toml(
            r#"
            neo4j_uri = "bolt://db:7687"
            neo4j_user = "neo4j"
            neo4j_password = "secret"
            port = 8080
            "#,
        )
        .unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_missing_uri_is_an_error() {
        let err = from_toml(
            r#"
            neo4j_user = "neo4j"
            neo4j_password = "secret"
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, NodegraphError::Config(_)));
        assert!(err.to_string().contains("neo4j_uri"));
    }

    #[test]
    fn test_missing_credentials_are_errors() {
        assert!(from_toml(r#"neo4j_uri = "bolt://db:7687""#).is_err());
        assert!(from_toml(
            r#"
            neo4j_uri = "bolt://db:7687"
            neo4j_user = "neo4j"
            "#
        )
        .is_err());
    }

    fn from_env(vars: &[(&str, &str)]) -> Result<AppConfig, NodegraphError> {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let cfg = config::Config::builder()
            .add_source(environment().source(Some(map)))
            .build()?;
        AppConfig::from_config(cfg)
    }

    const REQUIRED_ENV: [(&str, &str); 3] = [
        ("NEO4J_URI", "bolt://db:7687"),
        ("NEO4J_USER", "neo4j"),
        ("NEO4J_PASSWORD", "secret"),
    ];

    #[test]
    fn test_env_vars_map_to_fields() {
        let mut vars = REQUIRED_ENV.to_vec();
        vars.push(("PORT", "8080"));
        vars.push(("NEO4J_MAX_CONNECTIONS", "4"));

        let config = from_env(&vars).unwrap();
        assert_eq!(config.neo4j_uri, "bolt://db:7687");
        assert_eq!(config.neo4j_user, "neo4j");
        assert_eq!(config.neo4j_password, "secret");
        assert_eq!(config.port, 8080);
        assert_eq!(config.neo4j_max_connections, 4);
        assert_eq!(config.neo4j_fetch_size, 256);
    }

    #[test]
    fn test_env_port_defaults_to_3000() {
        let config = from_env(&REQUIRED_ENV).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_env_credentials_kept_verbatim() {
        let config = from_env(&[
            ("NEO4J_URI", "bolt://db:7687"),
            ("NEO4J_USER", "TRUE"),
            ("NEO4J_PASSWORD", "0123"),
        ])
        .unwrap();
        assert_eq!(config.neo4j_user, "TRUE");
        assert_eq!(config.neo4j_password, "0123");

        let config = from_env(&[
            ("NEO4J_URI", "bolt://db:7687"),
            ("NEO4J_USER", "neo4j"),
            ("NEO4J_PASSWORD", "1e5"),
        ])
        .unwrap();
        assert_eq!(config.neo4j_password, "1e5");
    }

    #[test]
    fn test_env_missing_password_is_an_error() {
        let err = from_env(&REQUIRED_ENV[..2]).unwrap_err();
        assert!(matches!(err, NodegraphError::Config(_)));
        assert!(err.to_string().contains("neo4j_password"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = from_toml(
            r#"
            neo4j_uri = "bolt://db:7687"
            neo4j_user = "neo4j"
            neo4j_password = "hunter2"
            "#,
        )
        .unwrap();
        let dbg = format!("{config:?}");
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("<redacted>"));
    }
}
