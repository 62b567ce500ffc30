// Copyright (C) 2026 Noah Blockchain Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

/// Failure of a single GET performed by a [`crate::Transport`]
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Node unavailable: {0}")]
    Unavailable(String),
}

/// Failure of one fetch attempt, kept verbatim as the last error of the retry loop
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("Failed to decode data of transaction {hash} (type {tx_type})")]
    TxPayload {
        hash: String,
        tx_type: u8,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to build HTTP client")]
    Client(#[source] TransportError),
}

impl ApiError {
    /// The error of the last fetch attempt, if this came out of the retry loop
    pub fn fetch_error(&self) -> Option<&FetchError> {
        match self {
            ApiError::Fetch { source, .. } => Some(source),
            _ => None,
        }
    }
}
