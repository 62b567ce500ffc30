//! Test doubles for the transport seam and sample node payloads.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

use crate::error::TransportError;
use crate::transport::Transport;

/// Base URL used by client tests
pub const TEST_LINK: &str = "http://node.test";

/// One scripted transport outcome
#[derive(Debug, Clone)]
pub enum Reply {
    Body(String),
    Fail(String),
}

impl Reply {
    /// A successful node envelope around `result`
    pub fn result(result: Value) -> Self {
        Reply::Body(envelope(result).to_string())
    }
}

#[derive(Default)]
struct SpyState {
    replies: VecDeque<Reply>,
    last: Option<Reply>,
    calls: Vec<(String, Instant)>,
}

/// Transport that replays scripted replies and records every request.
///
/// Once the script is exhausted the last reply is repeated.
#[derive(Clone, Default)]
pub struct SpyTransport {
    state: Arc<Mutex<SpyState>>,
}

impl SpyTransport {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        let state = SpyState {
            replies: replies.into_iter().collect(),
            ..Default::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn always(reply: Reply) -> Self {
        Self::new([reply])
    }

    pub fn calls(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.calls.iter().map(|(url, _)| url.clone()).collect()
    }

    pub fn call_times(&self) -> Vec<Instant> {
        let state = self.state.lock().unwrap();
        state.calls.iter().map(|(_, at)| *at).collect()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    /// URL of the only request made so far, relative to [`TEST_LINK`]
    pub fn single_path(&self) -> String {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one request: {calls:?}");
        calls[0]
            .strip_prefix(TEST_LINK)
            .expect("request outside of test link")
            .to_string()
    }
}

#[async_trait]
impl Transport for SpyTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let reply = {
            let mut state = self.state.lock().unwrap();
            state.calls.push((url.to_string(), Instant::now()));
            let reply = state.replies.pop_front().or_else(|| state.last.clone());
            state.last = reply.clone();
            reply
        };

        match reply {
            Some(Reply::Body(body)) => Ok(body.into_bytes()),
            Some(Reply::Fail(message)) => Err(TransportError::Unavailable(message)),
            None => Err(TransportError::Unavailable("no reply scripted".to_string())),
        }
    }
}

pub fn envelope(result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": "",
        "result": result,
    })
}

/// A transaction as the node lists it inside a block
pub fn transaction(hash: &str, tx_type: u8, data: Value) -> Value {
    json!({
        "hash": hash,
        "raw_tx": "f88a0102018a4e4f41480000000000000001",
        "from": "NOAHx7633980c000139dd3bd24a3f54e06474fa941e16",
        "nonce": "12",
        "gas_price": 1,
        "type": tx_type,
        "data": data,
        "payload": "",
        "service_data": "",
        "gas": "10",
        "gas_coin": "NOAH",
        "tags": {
            "tx.type": format!("{:02x}", tx_type),
            "tx.from": "7633980c000139dd3bd24a3f54e06474fa941e16",
        },
        "code": 0,
        "log": "",
    })
}

/// A block result holding `transactions`, with `num_txs` taken from their count
pub fn block(height: u64, transactions: Vec<Value>) -> Value {
    json!({
        "hash": "4B5BF3B6BCD5AB1E98C8B5DCB4E0C8D62AC4D1A2E9A6B5B4B8A5C9D5E1F2A3B4",
        "height": height.to_string(),
        "time": "2019-11-04T12:23:44.556148454Z",
        "num_txs": transactions.len().to_string(),
        "total_txs": "2411",
        "transactions": transactions,
        "block_reward": "333000000000000000000",
        "size": "1254",
        "proposer": "Np8c8c6c2bc6e4d5da4b4b6f1e5fa8e19a37b16ee3bf8a08d1e0d2db5ca0cb5dba",
        "validators": [
            {
                "pub_key": "Np8c8c6c2bc6e4d5da4b4b6f1e5fa8e19a37b16ee3bf8a08d1e0d2db5ca0cb5dba",
                "signed": true,
            }
        ],
    })
}

/// One well formed payload per known transaction type, keyed by tag
pub fn sample_payloads() -> Vec<(u8, Value)> {
    let address = "NOAHx7633980c000139dd3bd24a3f54e06474fa941e16";
    let pub_key = "Np8c8c6c2bc6e4d5da4b4b6f1e5fa8e19a37b16ee3bf8a08d1e0d2db5ca0cb5dba";

    vec![
        (1, json!({ "coin": "NOAH", "to": address, "value": "1000000000000000000" })),
        (
            2,
            json!({
                "coin_to_sell": "NOAH",
                "value_to_sell": "10",
                "coin_to_buy": "TESTCOIN",
                "minimum_value_to_buy": "1",
            }),
        ),
        (
            3,
            json!({ "coin_to_sell": "TESTCOIN", "coin_to_buy": "NOAH", "minimum_value_to_buy": "0" }),
        ),
        (
            4,
            json!({
                "coin_to_buy": "TESTCOIN",
                "value_to_buy": "5",
                "coin_to_sell": "NOAH",
                "maximum_value_to_sell": "100",
            }),
        ),
        (
            5,
            json!({
                "name": "Test coin",
                "symbol": "TESTCOIN",
                "initial_amount": "100000",
                "initial_reserve": "20000",
                "constant_reserve_ratio": "50",
                "max_supply": "1000000",
            }),
        ),
        (
            6,
            json!({
                "address": address,
                "pub_key": pub_key,
                "commission": "10",
                "coin": "NOAH",
                "stake": "5000",
            }),
        ),
        (7, json!({ "pub_key": pub_key, "coin": "NOAH", "value": "100" })),
        (8, json!({ "pub_key": pub_key, "coin": "NOAH", "value": "50" })),
        (9, json!({ "raw_check": "+QE4gjEwAoRibG9ja", "proof": "Ht0LpMeFyMzY" })),
        (10, json!({ "pub_key": pub_key })),
        (11, json!({ "pub_key": pub_key })),
        (
            12,
            json!({
                "threshold": "2",
                "weights": ["1", "1", "2"],
                "addresses": [address, address, address],
            }),
        ),
        (
            13,
            json!({
                "list": [
                    { "coin": "NOAH", "to": address, "value": "1" },
                    { "coin": "TESTCOIN", "to": address, "value": "2" },
                ]
            }),
        ),
        (
            14,
            json!({ "pub_key": pub_key, "reward_address": address, "owner_address": address }),
        ),
    ]
}
