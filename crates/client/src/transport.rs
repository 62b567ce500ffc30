// Copyright (C) 2026 Noah Blockchain Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! GET capability used by the client.
//!
//! The client only needs "fetch this URL, give me the body". [`HttpTransport`]
//! is the reqwest backed implementation with a pooled connection set; any
//! other implementation must be safe to call from several tasks at once.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::consts::{DEFAULT_IDLE_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, USER_AGENT};
use crate::error::TransportError;

#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET request and return the raw response body
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

/// HTTP transport backed by a pooled [`reqwest::Client`]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeouts(DEFAULT_REQUEST_TIMEOUT, DEFAULT_IDLE_TIMEOUT)
    }

    /// Create a transport with custom request and idle connection timeouts
    pub fn with_timeouts(
        request_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(request_timeout)
            .pool_idle_timeout(idle_timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let response = self.client.get(url).send().await?;

        // Error statuses still carry a JSON envelope, so the body is handed
        // to the decoder regardless of the status code.
        let status = response.status();
        let body = response.bytes().await?;

        debug!(url = %url, status = %status, bytes = body.len(), "Node responded");

        Ok(body.to_vec())
    }
}
