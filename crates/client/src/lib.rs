// Copyright (C) 2026 Noah Blockchain Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Client for the HTTP/JSON query interface of a Noah blockchain node.
//!
//! Every node endpoint maps to one async method on [`NoahNodeApi`]. Each call
//! performs a GET through a [`Transport`], decodes the JSON envelope and, for
//! blocks, decodes every transaction payload according to its type tag.

pub mod client;
pub mod consts;
pub mod decode;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod models;
pub mod responses;
pub mod transport;
pub mod utils;

#[cfg(test)]
pub mod test_fixtures;

pub use client::NoahNodeApi;
pub use error::{ApiError, FetchError, TransportError};
pub use fetch::RetryPolicy;
pub use models::{TxData, TxType};
pub use noah_node_api_config::PayloadErrorPolicy;
pub use responses::NodeResponse;
pub use transport::{HttpTransport, Transport};
