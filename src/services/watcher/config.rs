//! Subscription watcher configuration
//!
//! Reconnect pacing and connect timeout of a watcher. The reconnect interval
//! is fixed: there is no growth between attempts and no attempt limit.

use std::time::Duration;

use crate::{models::TransportConfig, utils::constants::DEFAULT_RECONNECT_INTERVAL_SECS};

/// Connection settings of a subscription watcher
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WatcherConfig {
	/// How long to wait after a disconnect or failed connect before retrying
	pub reconnect_interval: Duration,
	/// How long to wait for the websocket handshake; unbounded when `None`
	pub connect_timeout: Option<Duration>,
}

impl Default for WatcherConfig {
	fn default() -> Self {
		Self {
			reconnect_interval: Duration::from_secs(DEFAULT_RECONNECT_INTERVAL_SECS),
			connect_timeout: None,
		}
	}
}

impl WatcherConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a watcher configuration from the transport section of the config file
	pub fn from_transport(transport: &TransportConfig) -> Self {
		Self {
			reconnect_interval: transport.reconnect_interval(),
			connect_timeout: transport.connect_timeout(),
		}
	}

	pub fn with_reconnect_interval(mut self, reconnect_interval: Duration) -> Self {
		self.reconnect_interval = reconnect_interval;
		self
	}

	pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
		self.connect_timeout = Some(connect_timeout);
		self
	}
}
