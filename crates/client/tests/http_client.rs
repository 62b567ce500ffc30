// Copyright (C) 2026 Noah Blockchain Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! End to end tests of the client over real HTTP against a mock node.

use httpmock::prelude::*;
use noah_node_api::{ApiError, FetchError, NoahNodeApi, TransportError, TxData, TxType};
use serde_json::{Value, json};
use std::time::Duration;

fn envelope(result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": "", "result": result })
}

#[tokio::test]
async fn test_status_over_http() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/status");
            then.status(200).json_body(envelope(json!({
                "version": "0.2.5",
                "latest_block_hash": "A1B2",
                "latest_block_height": "5120",
                "latest_block_time": "2019-11-04T12:23:44Z"
            })));
        })
        .await;

    let api = NoahNodeApi::new(server.base_url()).unwrap();
    let status = api.status().await.unwrap().into_result().unwrap();

    mock.assert_async().await;
    assert_eq!(status.version, "0.2.5");
    assert_eq!(status.latest_block_height, "5120");
}

#[tokio::test]
async fn test_block_over_http() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/block").query_param("height", "77");
            then.status(200).json_body(envelope(json!({
                "hash": "B77",
                "height": "77",
                "num_txs": "2",
                "transactions": [
                    {
                        "hash": "Mt01",
                        "from": "NOAHx01",
                        "nonce": "1",
                        "gas_price": 1,
                        "type": 7,
                        "data": { "pub_key": "Np01", "coin": "NOAH", "value": "100" },
                        "payload": null,
                        "service_data": null,
                        "gas": "200",
                        "gas_coin": "NOAH",
                        "tags": { "tx.type": "07" }
                    },
                    {
                        "hash": "Mt02",
                        "from": "NOAHx02",
                        "nonce": "4",
                        "gas_price": 1,
                        "type": 200,
                        "data": { "something": "new" },
                        "gas": "10",
                        "gas_coin": "NOAH"
                    }
                ],
                "validators": null
            })));
        })
        .await;

    let api = NoahNodeApi::new(server.base_url()).unwrap();
    let block = api.block(77).await.unwrap().into_result().unwrap();

    mock.assert_async().await;
    assert_eq!(block.transactions.len(), 2);
    assert!(block.validators.is_empty());

    let delegate = &block.transactions[0];
    assert_eq!(delegate.known_type(), Some(TxType::Delegate));
    match delegate.decoded.as_ref() {
        Some(TxData::Delegate(data)) => {
            assert_eq!(data.pub_key, "Np01");
            assert_eq!(data.value, "100");
        }
        other => panic!("unexpected payload: {other:?}"),
    }

    let unknown = &block.transactions[1];
    assert_eq!(unknown.known_type(), None);
    assert!(unknown.decoded.is_none());
}

#[tokio::test]
async fn test_addresses_query_shape() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/addresses")
                .query_param("addresses", "[NOAHx01,NOAHx02]")
                .query_param("height", "10");
            then.status(200).json_body(envelope(json!([
                { "address": "NOAHx01", "balance": { "NOAH": "1" }, "transaction_count": "0" },
                { "address": "NOAHx02", "balance": { "NOAH": "2" }, "transaction_count": 5 }
            ])));
        })
        .await;

    let api = NoahNodeApi::new(server.base_url()).unwrap();
    let balances = api
        .addresses(&["NOAHx01", "NOAHx02"], 10)
        .await
        .unwrap()
        .into_result()
        .unwrap();

    mock.assert_async().await;
    assert_eq!(balances.len(), 2);
    assert_eq!(balances[1].transaction_count, "5");
}

#[tokio::test]
async fn test_error_status_still_decodes_envelope() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/candidate");
            then.status(404).json_body(json!({
                "jsonrpc": "2.0",
                "id": "",
                "error": { "code": 404, "message": "Candidate not found" }
            }));
        })
        .await;

    let api = NoahNodeApi::new(server.base_url()).unwrap();
    let response = api.candidate("Np01", 10).await.unwrap();

    assert!(response.is_error());
    assert_eq!(response.into_result().unwrap_err().code, 404);
}

#[tokio::test]
async fn test_invalid_body_is_retried() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/min_gas_price");
            then.status(502).body("<html>Bad Gateway</html>");
        })
        .await;

    let api = NoahNodeApi::with_fallback_retries(server.base_url(), 2, Duration::from_millis(10))
        .unwrap();
    let err = api.min_gas_price().await.unwrap_err();

    assert_eq!(mock.hits_async().await, 3);
    assert!(matches!(err.fetch_error(), Some(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_connection_refused() {
    // Reserve a free port, then release it so nothing is listening there.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let api = NoahNodeApi::with_fallback_retries(
        format!("http://127.0.0.1:{port}"),
        1,
        Duration::from_millis(5),
    )
    .unwrap();

    match api.status().await.unwrap_err() {
        ApiError::Fetch { url, source } => {
            assert_eq!(url, format!("http://127.0.0.1:{port}/status"));
            assert!(matches!(
                source,
                FetchError::Transport(TransportError::Request(_))
            ));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
