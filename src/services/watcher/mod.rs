//! Websocket subscription watchers.
//!
//! One watcher runs per (chain, address) pair and feeds detected transaction
//! hashes into the shared event queue:
//!
//! - `config`: reconnect interval and connect timeout
//! - `connection`: observable connection state
//! - `error`: error types for watcher sessions
//! - `service`: the connect/subscribe/read/reconnect loop

mod config;
mod connection;
mod error;
mod service;

pub use config::WatcherConfig;
pub use connection::ConnectionState;
pub use error::WatcherError;
pub use service::SubscriptionWatcher;
pub(crate) use service::wait_for_shutdown;
