//! Transaction types and the payload record of each type.

mod tx_data;

pub use tx_data::*;

use serde::Serialize;

/// Discriminant of a node transaction, as carried in its `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TxType {
    Send = 1,
    SellCoin = 2,
    SellAllCoin = 3,
    BuyCoin = 4,
    CreateCoin = 5,
    DeclareCandidacy = 6,
    Delegate = 7,
    Unbond = 8,
    RedeemCheck = 9,
    SetCandidateOnline = 10,
    SetCandidateOffline = 11,
    CreateMultisig = 12,
    MultiSend = 13,
    EditCandidate = 14,
}

impl TxType {
    pub const ALL: [TxType; 14] = [
        TxType::Send,
        TxType::SellCoin,
        TxType::SellAllCoin,
        TxType::BuyCoin,
        TxType::CreateCoin,
        TxType::DeclareCandidacy,
        TxType::Delegate,
        TxType::Unbond,
        TxType::RedeemCheck,
        TxType::SetCandidateOnline,
        TxType::SetCandidateOffline,
        TxType::CreateMultisig,
        TxType::MultiSend,
        TxType::EditCandidate,
    ];

    /// Known type for a wire tag, `None` for tags this client does not know yet
    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|tx_type| tx_type.tag() == tag)
    }

    pub fn tag(self) -> u8 {
        self as u8
    }
}

/// Decoded data of a transaction.
///
/// The variant always matches the [`TxType`] of the transaction it was
/// decoded from, see [`TxData::tx_type`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TxData {
    Send(SendTxData),
    SellCoin(SellCoinTxData),
    SellAllCoin(SellAllCoinTxData),
    BuyCoin(BuyCoinTxData),
    CreateCoin(CreateCoinTxData),
    DeclareCandidacy(DeclareCandidacyTxData),
    Delegate(DelegateTxData),
    Unbond(UnbondTxData),
    RedeemCheck(RedeemCheckTxData),
    SetCandidateOnline(SetCandidateTxData),
    SetCandidateOffline(SetCandidateTxData),
    CreateMultisig(CreateMultisigTxData),
    MultiSend(MultiSendTxData),
    EditCandidate(EditCandidateTxData),
}

impl TxData {
    pub fn tx_type(&self) -> TxType {
        match self {
            TxData::Send(_) => TxType::Send,
            TxData::SellCoin(_) => TxType::SellCoin,
            TxData::SellAllCoin(_) => TxType::SellAllCoin,
            TxData::BuyCoin(_) => TxType::BuyCoin,
            TxData::CreateCoin(_) => TxType::CreateCoin,
            TxData::DeclareCandidacy(_) => TxType::DeclareCandidacy,
            TxData::Delegate(_) => TxType::Delegate,
            TxData::Unbond(_) => TxType::Unbond,
            TxData::RedeemCheck(_) => TxType::RedeemCheck,
            TxData::SetCandidateOnline(_) => TxType::SetCandidateOnline,
            TxData::SetCandidateOffline(_) => TxType::SetCandidateOffline,
            TxData::CreateMultisig(_) => TxType::CreateMultisig,
            TxData::MultiSend(_) => TxType::MultiSend,
            TxData::EditCandidate(_) => TxType::EditCandidate,
        }
    }
}
