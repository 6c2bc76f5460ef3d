//! Core services implementing the transaction monitoring pipeline.
//!
//! This module contains the main service implementations:
//! - `watcher`: Websocket subscriptions per watched address
//! - `blockchain`: Transaction lookup over the Cosmos REST API
//! - `normalizer`: Conversion of transactions into chain-agnostic alerts
//! - `notification`: Alert delivery to Slack, Discord and Telegram
//! - `dispatcher`: Fan-in queue consumer driving fetch, normalize and notify

pub mod blockchain;
pub mod dispatcher;
pub mod normalizer;
pub mod notification;
pub mod watcher;
