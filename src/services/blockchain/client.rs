//! Transaction fetcher interface.

use async_trait::async_trait;

use crate::{models::RawTransaction, services::blockchain::FetchError};

/// Looks up full transactions by hash
///
/// Implementations perform a single request per call and never retry.
#[async_trait]
pub trait TransactionFetcher: Send + Sync {
	/// Fetches the transaction `tx_hash` from the REST API rooted at `rest_endpoint`
	async fn fetch(&self, rest_endpoint: &str, tx_hash: &str)
		-> Result<RawTransaction, FetchError>;
}
