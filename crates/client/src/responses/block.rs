use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Transaction;
use crate::consts::EMPTY_TX_COUNT;
use crate::utils::{null_as_default, string_or_number};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockResult {
    pub hash: String,
    #[serde(deserialize_with = "string_or_number")]
    pub height: String,
    pub time: String,
    #[serde(rename = "num_txs", deserialize_with = "string_or_number")]
    pub tx_count: String,
    #[serde(deserialize_with = "string_or_number")]
    pub total_txs: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transactions: Vec<Transaction>,
    pub block_reward: String,
    #[serde(deserialize_with = "string_or_number")]
    pub size: String,
    pub proposer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub validators: Vec<BlockValidator>,
}

impl BlockResult {
    /// Whether the node reports any transaction in this block
    pub fn has_transactions(&self) -> bool {
        self.tx_count != EMPTY_TX_COUNT
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockValidator {
    pub pub_key: String,
    pub signed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsResult {
    #[serde(deserialize_with = "null_as_default")]
    pub events: Vec<Event>,
}

/// Event emitted at block end (rewards, slashes, unbonds)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    pub value: EventValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventValue {
    pub role: String,
    pub address: String,
    pub amount: String,
    pub coin: String,
    pub validator_pub_key: String,
    /// Fields of event kinds this client does not model
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Validator {
    pub pub_key: String,
    #[serde(deserialize_with = "string_or_number")]
    pub voting_power: String,
}
