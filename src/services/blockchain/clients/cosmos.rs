//! Cosmos SDK REST client.
//!
//! Fetches transactions from the `GET /cosmos/tx/v1beta1/txs/{hash}` endpoint
//! of a chain's REST (LCD) API.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::instrument;
use url::Url;

use crate::{
	models::RawTransaction,
	services::blockchain::{FetchError, TransactionFetcher},
	utils::constants::TX_QUERY_PATH,
};

/// Builds `{rest_endpoint}/cosmos/tx/v1beta1/txs/{tx_hash}`
pub fn build_tx_url(rest_endpoint: &str, tx_hash: &str) -> Result<Url, FetchError> {
	let url = format!(
		"{}/{}/{}",
		rest_endpoint.trim_end_matches('/'),
		TX_QUERY_PATH,
		tx_hash
	);
	Ok(Url::parse(&url)?)
}

/// Transaction fetcher backed by reqwest
///
/// One client is shared by all chains; the endpoint is chosen per call.
#[derive(Clone, Debug)]
pub struct CosmosRestClient {
	client: Client,
}

impl CosmosRestClient {
	/// Creates a client, optionally bounding every request by `request_timeout`
	///
	/// Without a timeout the transport defaults apply.
	pub fn new(request_timeout: Option<Duration>) -> Result<Self, anyhow::Error> {
		let mut builder = ClientBuilder::new();
		if let Some(request_timeout) = request_timeout {
			builder = builder.timeout(request_timeout);
		}
		let client = builder.build().context("Failed to create HTTP client")?;
		Ok(Self { client })
	}
}

#[async_trait]
impl TransactionFetcher for CosmosRestClient {
	#[instrument(skip(self))]
	async fn fetch(
		&self,
		rest_endpoint: &str,
		tx_hash: &str,
	) -> Result<RawTransaction, FetchError> {
		let url = build_tx_url(rest_endpoint, tx_hash)?;
		let response = self.client.get(url.clone()).send().await?;

		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status {
				status: status.as_u16(),
				url: url.to_string(),
			});
		}

		let body = response.bytes().await?;
		let transaction: RawTransaction = serde_json::from_slice(&body)?;
		tracing::debug!(
			height = %transaction.tx_response.height,
			messages = transaction.tx.body.messages.len(),
			"Fetched transaction"
		);
		Ok(transaction)
	}
}
