// Copyright (C) 2026 Noah Blockchain Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Response records mirroring the JSON the node returns.
//!
//! Every endpoint answers with the same envelope; [`NodeResponse`] is generic
//! over the endpoint specific result and each endpoint gets an alias.

mod address;
mod block;
mod candidate;
mod coin;
mod status;
mod transaction;

pub use address::{AddressBalance, AddressResult};
pub use block::{BlockResult, BlockValidator, Event, EventValue, EventsResult, Validator};
pub use candidate::{Candidate, Stake};
pub use coin::{
    CoinInfoResult, EstimateCoinBuyResult, EstimateCoinSellAllResult, EstimateCoinSellResult,
    EstimateTxResult, MinGasPrice,
};
pub use status::StatusResult;
pub use transaction::{SendTransactionResult, Transaction};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Envelope shared by all endpoints.
///
/// On failure the node sends `error` and usually no `result`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeResponse<T> {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Value,
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<NodeError>,
}

impl<T> NodeResponse<T> {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Turn the envelope into its result, or the error the node reported
    pub fn into_result(self) -> Result<T, NodeError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.result.ok_or_else(NodeError::missing_result)
    }
}

/// Error object reported by the node inside the envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Error)]
#[error("node error {code}: {message}")]
#[serde(default)]
pub struct NodeError {
    pub code: i64,
    pub message: String,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_result: Option<TxResult>,
}

impl NodeError {
    fn missing_result() -> Self {
        Self {
            message: "response carries neither result nor error".to_string(),
            ..Default::default()
        }
    }
}

/// Check result attached to a rejected transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxResult {
    pub code: u32,
    pub log: String,
}

pub type StatusResponse = NodeResponse<StatusResult>;
pub type BlockResponse = NodeResponse<BlockResult>;
pub type EventsResponse = NodeResponse<EventsResult>;
pub type ValidatorsResponse = NodeResponse<Vec<Validator>>;
pub type CandidateResponse = NodeResponse<Candidate>;
pub type BlockCandidatesResponse = NodeResponse<Vec<Candidate>>;
pub type CoinInfoResponse = NodeResponse<CoinInfoResult>;
pub type AddressResponse = NodeResponse<AddressResult>;
pub type BalancesResponse = NodeResponse<Vec<AddressBalance>>;
pub type EstimateTxResponse = NodeResponse<EstimateTxResult>;
pub type EstimateCoinBuyResponse = NodeResponse<EstimateCoinBuyResult>;
pub type EstimateCoinSellResponse = NodeResponse<EstimateCoinSellResult>;
pub type EstimateCoinSellAllResponse = NodeResponse<EstimateCoinSellAllResult>;
pub type GasResponse = NodeResponse<MinGasPrice>;
pub type SendTransactionResponse = NodeResponse<SendTransactionResult>;
pub type TransactionsResponse = NodeResponse<Vec<Transaction>>;
pub type TransactionResponse = NodeResponse<Transaction>;
