use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::models::{TxData, TxType};
use crate::utils::{null_as_default, string_or_number, tx_tag};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub hash: String,
    pub raw_tx: String,
    /// Only filled by the single transaction and search endpoints
    #[serde(deserialize_with = "string_or_number")]
    pub height: String,
    pub index: u32,
    pub from: String,
    #[serde(deserialize_with = "string_or_number")]
    pub nonce: String,
    #[serde(deserialize_with = "string_or_number")]
    pub gas_price: String,
    /// Wire tag selecting the shape of `data`, kept as sent
    #[serde(rename = "type")]
    pub tx_type: Value,
    /// Payload exactly as the node sent it
    pub data: Value,
    /// `data` decoded according to `tx_type`.
    ///
    /// Only filled by the block endpoint, and left unset for tags this client
    /// does not know.
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub decoded: Option<TxData>,
    #[serde(deserialize_with = "null_as_default")]
    pub payload: String,
    #[serde(deserialize_with = "null_as_default")]
    pub service_data: String,
    #[serde(deserialize_with = "string_or_number")]
    pub gas: String,
    pub gas_coin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: HashMap<String, String>,
    pub code: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub log: String,
}

impl Transaction {
    /// Numeric tag, `None` when the node sent something that is not one
    pub fn tag(&self) -> Option<u8> {
        tx_tag(&self.tx_type)
    }

    /// Known type of this transaction, `None` for an unknown tag
    pub fn known_type(&self) -> Option<TxType> {
        self.tag().and_then(TxType::from_tag)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendTransactionResult {
    pub code: u32,
    pub data: String,
    pub log: String,
    pub hash: String,
}
