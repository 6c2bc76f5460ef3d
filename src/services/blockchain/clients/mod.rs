//! Chain specific fetcher implementations.

mod cosmos;

pub use cosmos::{build_tx_url, CosmosRestClient};
