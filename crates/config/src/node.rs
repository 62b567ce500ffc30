use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeConfigError {
    #[error("Node URL cannot be empty")]
    EmptyUrl,

    #[error("Invalid node URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid node URL scheme '{0}'. Must be http:// or https://")]
    InvalidScheme(String),

    #[error("Request timeout cannot be 0")]
    ZeroTimeout,
}

/// What to do when a transaction payload with a known type fails to decode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadErrorPolicy {
    /// Fail the whole call with the decode error
    #[default]
    Propagate,
    /// Leave the decoded payload unset and keep going
    Ignore,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeConfig {
    /// Base URL of the node HTTP API
    ///
    /// Env: NOAH_NODE_URL
    /// Valid schemes: http://, https://
    /// Default: http://127.0.0.1:8841
    #[serde(default = "default_url")]
    pub url: String,

    /// Number of extra attempts after a failed fetch
    ///
    /// Env: NOAH_NODE_RETRIES
    /// Default: 0
    #[serde(default)]
    pub retries: u32,

    /// Fixed pause between two attempts, in milliseconds
    ///
    /// Env: NOAH_NODE_RETRY_DELAY_MS
    /// Default: 0
    #[serde(default)]
    pub retry_delay_ms: u64,

    /// Timeout of a single HTTP request, in milliseconds
    ///
    /// Env: NOAH_NODE_REQUEST_TIMEOUT_MS
    /// Default: 30000
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// How long an idle pooled connection is kept, in milliseconds
    ///
    /// Env: NOAH_NODE_IDLE_TIMEOUT_MS
    /// Default: 5000
    #[serde(default = "default_idle_timeout_ms")]
    pub idle_timeout_ms: u64,

    /// Env: NOAH_NODE_PAYLOAD_ERRORS
    /// Valid values: propagate, ignore
    /// Default: propagate
    #[serde(default)]
    pub payload_errors: PayloadErrorPolicy,
}

fn default_url() -> String {
    "http://127.0.0.1:8841".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_idle_timeout_ms() -> u64 {
    5_000
}

impl NodeConfig {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }

    pub(crate) fn validate(&self) -> Result<(), NodeConfigError> {
        if self.url.is_empty() {
            return Err(NodeConfigError::EmptyUrl);
        }

        let parsed = url::Url::parse(&self.url).map_err(|source| NodeConfigError::InvalidUrl {
            url: self.url.clone(),
            source,
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => return Err(NodeConfigError::InvalidScheme(scheme.to_string())),
        }

        if self.request_timeout_ms == 0 {
            return Err(NodeConfigError::ZeroTimeout);
        }

        Ok(())
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            retries: 0,
            retry_delay_ms: 0,
            request_timeout_ms: default_request_timeout_ms(),
            idle_timeout_ms: default_idle_timeout_ms(),
            payload_errors: PayloadErrorPolicy::default(),
        }
    }
}
