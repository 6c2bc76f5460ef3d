//! Blockchain-specific model implementations.
//!
//! Only Cosmos SDK chains are supported; every chain in the configuration is
//! expected to expose the Tendermint websocket and the Cosmos REST API.

pub mod cosmos;
