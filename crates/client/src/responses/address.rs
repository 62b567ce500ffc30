use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::string_or_number;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressResult {
    /// Balance per coin symbol
    pub balance: HashMap<String, String>,
    #[serde(deserialize_with = "string_or_number")]
    pub transaction_count: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressBalance {
    pub address: String,
    pub balance: HashMap<String, String>,
    #[serde(deserialize_with = "string_or_number")]
    pub transaction_count: String,
}
