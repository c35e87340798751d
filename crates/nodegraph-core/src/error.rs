use thiserror::Error;

/// Top-level error type for nodegraph.
#[derive(Error, Debug)]
pub enum NodegraphError {
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for NodegraphError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
