// Copyright (C) 2026 Noah Blockchain Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fetch a URL and decode its JSON body, retrying with a fixed delay.

use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::transport::Transport;

/// How many times a failed fetch is repeated and how long to wait in between.
///
/// The delay is constant: no backoff growth and no jitter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts made after the first one fails
    pub retries: u32,
    /// Pause between a failed attempt and the next one
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(retries: u32, delay: Duration) -> Self {
        Self { retries, delay }
    }

    /// Total number of attempts, first one included
    pub fn max_attempts(&self) -> u64 {
        u64::from(self.retries) + 1
    }
}

/// GET `url` and decode the body as `R`.
///
/// A transport failure and a decode failure both count as a failed attempt.
/// After the last permitted attempt the error of that attempt is returned.
pub async fn fetch_json<R, T>(transport: &T, policy: RetryPolicy, url: &str) -> Result<R, FetchError>
where
    R: DeserializeOwned,
    T: Transport + ?Sized,
{
    let max_attempts = policy.max_attempts();
    let mut attempt: u64 = 1;

    loop {
        debug!(url = %url, attempt, max_attempts, "Fetching");

        match fetch_once(transport, url).await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_attempts => {
                warn!(
                    url = %url,
                    attempt,
                    remaining = max_attempts - attempt,
                    delay = ?policy.delay,
                    error = %err,
                    "Fetch attempt failed, retrying"
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
            Err(err) => {
                warn!(url = %url, attempt, error = %err, "Fetch failed, no retries left");
                return Err(err);
            }
        }
    }
}

async fn fetch_once<R, T>(transport: &T, url: &str) -> Result<R, FetchError>
where
    R: DeserializeOwned,
    T: Transport + ?Sized,
{
    let body = transport.get(url).await?;
    Ok(serde_json::from_slice(&body)?)
}
