use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::string_or_number;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusResult {
    pub version: String,
    pub latest_block_hash: String,
    pub latest_app_hash: String,
    #[serde(deserialize_with = "string_or_number")]
    pub latest_block_height: String,
    pub latest_block_time: String,
    pub state_history: String,
    /// Raw Tendermint status, passed through untouched
    pub tm_status: Value,
}
