use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, time::Duration};

use crate::{
	models::core::{AlertingConfig, ChainConfig, WatchTarget},
	utils::constants::DEFAULT_RECONNECT_INTERVAL_SECS,
};

/// Connection tuning shared by all chains
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransportConfig {
	/// Delay before every reconnect attempt (defaults to 60 seconds)
	#[serde(default)]
	pub reconnect_interval_secs: Option<u64>,
	/// Websocket connect timeout; transport default when unset
	#[serde(default)]
	pub connect_timeout_ms: Option<u64>,
	/// REST request timeout; transport default when unset
	#[serde(default)]
	pub request_timeout_ms: Option<u64>,
}

impl TransportConfig {
	pub fn reconnect_interval(&self) -> Duration {
		Duration::from_secs(
			self.reconnect_interval_secs
				.unwrap_or(DEFAULT_RECONNECT_INTERVAL_SECS),
		)
	}

	pub fn connect_timeout(&self) -> Option<Duration> {
		self.connect_timeout_ms.map(Duration::from_millis)
	}

	pub fn request_timeout(&self) -> Option<Duration> {
		self.request_timeout_ms.map(Duration::from_millis)
	}
}

/// Root of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
	#[serde(default)]
	pub alerting: AlertingConfig,
	#[serde(default)]
	pub chains: BTreeMap<String, ChainConfig>,
	#[serde(default)]
	pub transport: TransportConfig,
}

impl Config {
	/// Every (chain, address) pair to watch, ordered by chain name
	pub fn watch_targets(&self) -> Vec<WatchTarget> {
		self.chains
			.iter()
			.flat_map(|(name, chain)| WatchTarget::from_chain(name, chain))
			.collect()
	}
}
