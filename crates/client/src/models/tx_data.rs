use serde::{Deserialize, Serialize};

use crate::utils::{string_or_number, vec_string_or_number};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendTxData {
    pub coin: String,
    pub to: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellCoinTxData {
    pub coin_to_sell: String,
    pub value_to_sell: String,
    pub coin_to_buy: String,
    pub minimum_value_to_buy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellAllCoinTxData {
    pub coin_to_sell: String,
    pub coin_to_buy: String,
    pub minimum_value_to_buy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuyCoinTxData {
    pub coin_to_buy: String,
    pub value_to_buy: String,
    pub coin_to_sell: String,
    pub maximum_value_to_sell: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCoinTxData {
    pub name: String,
    pub symbol: String,
    pub initial_amount: String,
    pub initial_reserve: String,
    #[serde(deserialize_with = "string_or_number")]
    pub constant_reserve_ratio: String,
    /// Absent on nodes that predate capped coins
    #[serde(default)]
    pub max_supply: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeclareCandidacyTxData {
    pub address: String,
    pub pub_key: String,
    #[serde(deserialize_with = "string_or_number")]
    pub commission: String,
    pub coin: String,
    pub stake: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DelegateTxData {
    pub pub_key: String,
    pub coin: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnbondTxData {
    pub pub_key: String,
    pub coin: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedeemCheckTxData {
    pub raw_check: String,
    pub proof: String,
}

/// Payload of both "set candidate online" and "set candidate offline"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetCandidateTxData {
    pub pub_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateMultisigTxData {
    #[serde(deserialize_with = "string_or_number")]
    pub threshold: String,
    #[serde(deserialize_with = "vec_string_or_number")]
    pub weights: Vec<String>,
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiSendTxData {
    pub list: Vec<SendTxData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditCandidateTxData {
    pub pub_key: String,
    pub reward_address: String,
    pub owner_address: String,
}
