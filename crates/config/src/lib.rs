mod args;
mod error;
mod log;
mod node;

pub use args::Args;
pub use error::ConfigError;
pub use log::{LogConfig, LogError};
pub use node::{NodeConfig, NodeConfigError, PayloadErrorPolicy};

use serde::Deserialize;

/// Environment prefix of the node client section
pub const NODE_ENV_PREFIX: &str = "NOAH_NODE_";

/// Environment prefix of the logging section
pub const LOG_ENV_PREFIX: &str = "NOAH_LOG_";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeApiConfig {
    #[serde(default)]
    pub node: NodeConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl NodeApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let node = envy::prefixed(NODE_ENV_PREFIX).from_env::<NodeConfig>()?;
        let log = envy::prefixed(LOG_ENV_PREFIX).from_env::<LogConfig>()?;

        let config = Self { node, log };
        config.validate()?;
        Ok(config)
    }

    /// Load variables from `env_file` (when it exists) and then read the environment
    pub fn from_env_file(env_file: &str) -> Result<Self, ConfigError> {
        if std::path::Path::new(env_file).exists() {
            dotenv::from_filename(env_file)
                .map_err(|e| ConfigError::EnvFileError(env_file.to_string(), e.to_string()))?;
        }
        Self::from_env()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.node.validate()?;
        self.log.validate()?;
        Ok(())
    }
}
