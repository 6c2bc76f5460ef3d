//! Multi-chain Cosmos transaction monitor.
//!
//! Subscribes to transfer events of watched addresses over Tendermint RPC
//! websockets, looks up every detected transaction through the chain's REST
//! API, normalizes it into a chain-agnostic alert and sends it to the
//! configured Slack, Discord and Telegram channels.
//!
//! # Architecture
//! - Models: configuration, Cosmos transaction formats and alerts
//! - Services: watchers, fetcher, normalizer, notifications and the dispatcher
//! - Bootstrap: wiring of the services into a running monitor

pub mod bootstrap;
pub mod models;
pub mod services;
pub mod utils;
