// Copyright (C) 2026 Noah Blockchain Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! One method per node endpoint.
//!
//! Every method builds the endpoint URL from its parameters, fetches it with
//! the client's [`RetryPolicy`] and returns the decoded envelope. Parameters
//! are not validated; whatever the node answers is handed back.

use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::PayloadErrorPolicy;
use crate::decode::decode_block_transactions;
use crate::error::ApiError;
use crate::fetch::{RetryPolicy, fetch_json};
use crate::responses::{
    AddressResponse, BalancesResponse, BlockCandidatesResponse, BlockResponse, CandidateResponse,
    CoinInfoResponse, EstimateCoinBuyResponse, EstimateCoinSellAllResponse,
    EstimateCoinSellResponse, EstimateTxResponse, EventsResponse, GasResponse,
    SendTransactionResponse, StatusResponse, TransactionResponse, TransactionsResponse,
    ValidatorsResponse,
};
use crate::transport::{HttpTransport, Transport};
use crate::utils::{address_list, query_escape, raw_tx, uppercase_first_char};
use noah_node_api_config::NodeConfig;

/// Handle on one node API.
///
/// Holds its own configuration; create as many as needed and share them by
/// reference across tasks.
#[derive(Debug, Clone)]
pub struct NoahNodeApi<T = HttpTransport> {
    link: String,
    transport: T,
    retry: RetryPolicy,
    payload_errors: PayloadErrorPolicy,
}

impl NoahNodeApi<HttpTransport> {
    /// Client for `link` with the default HTTP transport and no retries
    pub fn new(link: impl Into<String>) -> Result<Self, ApiError> {
        let transport = HttpTransport::new().map_err(ApiError::Client)?;
        Ok(Self::with_transport(link, transport))
    }

    /// Client that repeats a failed fetch up to `retries` times, `delay` apart
    pub fn with_fallback_retries(
        link: impl Into<String>,
        retries: u32,
        delay: Duration,
    ) -> Result<Self, ApiError> {
        Ok(Self::new(link)?.retries(retries).retry_delay(delay))
    }

    pub fn from_config(config: &NodeConfig) -> Result<Self, ApiError> {
        let transport = HttpTransport::with_timeouts(config.request_timeout(), config.idle_timeout())
            .map_err(ApiError::Client)?;

        Ok(Self::with_transport(config.url.clone(), transport)
            .retries(config.retries)
            .retry_delay(config.retry_delay())
            .payload_errors(config.payload_errors))
    }
}

impl<T: Transport> NoahNodeApi<T> {
    pub fn with_transport(link: impl Into<String>, transport: T) -> Self {
        Self {
            link: link.into(),
            transport,
            retry: RetryPolicy::default(),
            payload_errors: PayloadErrorPolicy::default(),
        }
    }

    pub fn retries(mut self, retries: u32) -> Self {
        self.retry.retries = retries;
        self
    }

    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry.delay = delay;
        self
    }

    pub fn payload_errors(mut self, policy: PayloadErrorPolicy) -> Self {
        self.payload_errors = policy;
        self
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn set_link(&mut self, link: impl Into<String>) {
        self.link = link.into();
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    pub async fn status(&self) -> Result<StatusResponse, ApiError> {
        self.get("/status").await
    }

    /// Block at `height`, with the data of every known transaction decoded
    pub async fn block(&self, height: u64) -> Result<BlockResponse, ApiError> {
        let mut response: BlockResponse = self.get(&format!("/block?height={height}")).await?;

        if let Some(block) = response.result.as_mut() {
            decode_block_transactions(block, self.payload_errors)?;
            debug!(height, txs = block.transactions.len(), "Block transactions decoded");
        }

        Ok(response)
    }

    pub async fn block_events(&self, height: u64) -> Result<EventsResponse, ApiError> {
        self.get(&format!("/events?height={height}")).await
    }

    pub async fn block_validators(&self, height: u64) -> Result<ValidatorsResponse, ApiError> {
        self.get(&format!("/validators?height={height}")).await
    }

    pub async fn candidate(&self, pub_key: &str, height: u64) -> Result<CandidateResponse, ApiError> {
        self.get(&format!("/candidate?pubkey={pub_key}&height={height}"))
            .await
    }

    /// Candidates at `height`; stakes are only listed when `stakes` is set
    pub async fn candidates(
        &self,
        height: u64,
        stakes: bool,
    ) -> Result<BlockCandidatesResponse, ApiError> {
        let mut path = format!("/candidates?height={height}");
        if stakes {
            path.push_str("&include_stakes=true");
        }
        self.get(&path).await
    }

    pub async fn coin_info(&self, symbol: &str) -> Result<CoinInfoResponse, ApiError> {
        self.get(&format!("/coin_info?symbol={symbol}")).await
    }

    /// Balances of one address. The first letter is sent uppercased.
    pub async fn address(&self, address: &str) -> Result<AddressResponse, ApiError> {
        let address = uppercase_first_char(address);
        self.get(&format!("/address?address={address}")).await
    }

    /// Balances of several addresses, sent as a bare `[a,b]` list
    pub async fn addresses<S: AsRef<str>>(
        &self,
        addresses: &[S],
        height: u64,
    ) -> Result<BalancesResponse, ApiError> {
        let list = address_list(addresses);
        self.get(&format!("/addresses?addresses={list}&height={height}"))
            .await
    }

    pub async fn estimate_tx(&self, tx: &str) -> Result<EstimateTxResponse, ApiError> {
        self.get(&format!("/estimate_tx_commission?tx={tx}")).await
    }

    pub async fn estimate_coin_buy(
        &self,
        coin_to_sell: &str,
        coin_to_buy: &str,
        value_to_buy: &str,
    ) -> Result<EstimateCoinBuyResponse, ApiError> {
        self.get(&format!(
            "/estimate_coin_buy?coin_to_sell={coin_to_sell}&coin_to_buy={coin_to_buy}&value_to_buy={value_to_buy}"
        ))
        .await
    }

    pub async fn estimate_coin_sell(
        &self,
        coin_to_sell: &str,
        coin_to_buy: &str,
        value_to_sell: &str,
        height: u64,
    ) -> Result<EstimateCoinSellResponse, ApiError> {
        self.get(&format!(
            "/estimate_coin_sell?coin_to_sell={coin_to_sell}&coin_to_buy={coin_to_buy}&value_to_sell={value_to_sell}&height={height}"
        ))
        .await
    }

    pub async fn estimate_coin_sell_all(
        &self,
        coin_to_sell: &str,
        coin_to_buy: &str,
        value_to_sell: &str,
        gas_price: &str,
    ) -> Result<EstimateCoinSellAllResponse, ApiError> {
        self.get(&format!(
            "/estimate_coin_sell_all?coin_to_sell={coin_to_sell}&coin_to_buy={coin_to_buy}&value_to_sell={value_to_sell}&gas_price={gas_price}"
        ))
        .await
    }

    pub async fn min_gas_price(&self) -> Result<GasResponse, ApiError> {
        self.get("/min_gas_price").await
    }

    /// Submit a signed transaction given as hex without the `0x` marker
    pub async fn push_transaction(&self, tx: &str) -> Result<SendTransactionResponse, ApiError> {
        let tx = raw_tx(tx);
        self.get(&format!("/send_transaction?tx={tx}")).await
    }

    /// Search transactions with a free text node query, e.g. `tags.tx.from='…'`
    pub async fn transactions_by_query(&self, query: &str) -> Result<TransactionsResponse, ApiError> {
        let query = query_escape(query);
        self.get(&format!("/transactions?query={query}")).await
    }

    pub async fn transaction(&self, hash: &str) -> Result<TransactionResponse, ApiError> {
        self.get(&format!("/transaction?hash={hash}")).await
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let url = format!("{}{}", self.link, path);
        fetch_json(&self.transport, self.retry, &url)
            .await
            .map_err(|source| ApiError::Fetch { url, source })
    }
}
