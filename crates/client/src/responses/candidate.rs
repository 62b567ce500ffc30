use serde::{Deserialize, Serialize};

use crate::utils::string_or_number;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Candidate {
    pub reward_address: String,
    pub owner_address: String,
    pub total_stake: String,
    pub pub_key: String,
    #[serde(deserialize_with = "string_or_number")]
    pub commission: String,
    /// Only present when stakes were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stakes: Option<Vec<Stake>>,
    #[serde(deserialize_with = "string_or_number")]
    pub created_at_block: String,
    pub status: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stake {
    pub owner: String,
    pub coin: String,
    pub value: String,
    pub noah_value: String,
}
