use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration from environment: {0}")]
    EnvError(#[from] envy::Error),

    #[error("Failed to load env file '{0}': {1}")]
    EnvFileError(String, String),

    #[error("Node configuration error: {0}")]
    NodeError(#[from] crate::node::NodeConfigError),

    #[error("Log configuration error: {0}")]
    LogError(#[from] crate::log::LogError),
}
