// Copyright (C) 2026 Noah Blockchain Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoding of transaction payloads selected by the transaction type tag.
//!
//! A table maps every known [`TxType`] to the function decoding its payload.
//! Supporting a new transaction type means adding a [`TxData`] variant and a
//! row to [`DECODERS`].

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::PayloadErrorPolicy;
use crate::error::ApiError;
use crate::models::{TxData, TxType};
use crate::responses::BlockResult;

type DecodeFn = fn(&Value) -> Result<TxData, serde_json::Error>;

fn parse<D: DeserializeOwned>(raw: &Value) -> Result<D, serde_json::Error> {
    D::deserialize(raw)
}

static DECODERS: [(TxType, DecodeFn); 14] = [
    (TxType::Send, |raw| parse(raw).map(TxData::Send)),
    (TxType::SellCoin, |raw| parse(raw).map(TxData::SellCoin)),
    (TxType::SellAllCoin, |raw| parse(raw).map(TxData::SellAllCoin)),
    (TxType::BuyCoin, |raw| parse(raw).map(TxData::BuyCoin)),
    (TxType::CreateCoin, |raw| parse(raw).map(TxData::CreateCoin)),
    (TxType::DeclareCandidacy, |raw| parse(raw).map(TxData::DeclareCandidacy)),
    (TxType::Delegate, |raw| parse(raw).map(TxData::Delegate)),
    (TxType::Unbond, |raw| parse(raw).map(TxData::Unbond)),
    (TxType::RedeemCheck, |raw| parse(raw).map(TxData::RedeemCheck)),
    (TxType::SetCandidateOnline, |raw| parse(raw).map(TxData::SetCandidateOnline)),
    (TxType::SetCandidateOffline, |raw| parse(raw).map(TxData::SetCandidateOffline)),
    (TxType::CreateMultisig, |raw| parse(raw).map(TxData::CreateMultisig)),
    (TxType::MultiSend, |raw| parse(raw).map(TxData::MultiSend)),
    (TxType::EditCandidate, |raw| parse(raw).map(TxData::EditCandidate)),
];

fn decoder_for(tag: u8) -> Option<DecodeFn> {
    DECODERS
        .iter()
        .find(|(tx_type, _)| tx_type.tag() == tag)
        .map(|(_, decode)| *decode)
}

/// Decode `raw` as the payload of a transaction tagged `tag`.
///
/// Unknown tags are not an error and yield `Ok(None)`.
pub fn decode_payload(tag: u8, raw: &Value) -> Result<Option<TxData>, serde_json::Error> {
    match decoder_for(tag) {
        Some(decode) => decode(raw).map(Some),
        None => Ok(None),
    }
}

/// Fill [`crate::responses::Transaction::decoded`] for every transaction of `block`.
///
/// Nothing is decoded when the block reports no transactions.
pub fn decode_block_transactions(
    block: &mut BlockResult,
    policy: PayloadErrorPolicy,
) -> Result<(), ApiError> {
    if !block.has_transactions() {
        return Ok(());
    }

    for tx in block.transactions.iter_mut() {
        let Some(tx_type) = tx.known_type() else {
            debug!(hash = %tx.hash, tx_type = %tx.tx_type, "Unknown transaction type, data left undecoded");
            tx.decoded = None;
            continue;
        };

        match decode_payload(tx_type.tag(), &tx.data) {
            Ok(decoded) => tx.decoded = decoded,
            Err(source) => match policy {
                PayloadErrorPolicy::Propagate => {
                    return Err(ApiError::TxPayload {
                        hash: tx.hash.clone(),
                        tx_type: tx_type.tag(),
                        source,
                    });
                }
                PayloadErrorPolicy::Ignore => {
                    warn!(
                        hash = %tx.hash,
                        tx_type = tx_type.tag(),
                        error = %source,
                        "Ignoring malformed transaction data"
                    );
                    tx.decoded = None;
                }
            },
        }
    }

    Ok(())
}
