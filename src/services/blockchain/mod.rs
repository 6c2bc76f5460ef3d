//! Blockchain data access.
//!
//! Provides the transaction fetcher used by the dispatcher:
//!
//! - `TransactionFetcher` trait
//! - Cosmos REST implementation
//! - Error handling for fetch operations

mod client;
mod clients;
mod error;

pub use client::TransactionFetcher;
pub use clients::{build_tx_url, CosmosRestClient};
pub use error::FetchError;
