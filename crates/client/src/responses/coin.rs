use serde::{Deserialize, Serialize};

use crate::utils::string_or_number;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinInfoResult {
    pub name: String,
    pub symbol: String,
    pub volume: String,
    #[serde(deserialize_with = "string_or_number")]
    pub crr: String,
    pub reserve_balance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateTxResult {
    pub commission: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateCoinBuyResult {
    pub will_pay: String,
    pub commission: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateCoinSellResult {
    pub will_get: String,
    pub commission: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateCoinSellAllResult {
    pub will_get: String,
}

/// Minimal gas price accepted by the node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinGasPrice(#[serde(deserialize_with = "string_or_number")] pub String);
