use serde::{Deserialize, Serialize};

/// A wallet watched on a chain
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WalletInfo {
	pub wallet_address: String,
}

/// Endpoints and watched wallets of a single chain
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChainConfig {
	/// Tendermint RPC endpoint, `http(s)://` or `ws(s)://`
	pub rpc: String,
	/// Cosmos REST (LCD) endpoint
	pub api: String,
	/// Explorer transaction URL prefix; the hash is appended to it
	#[serde(alias = "explorerURL")]
	pub explorer_url: String,
	#[serde(alias = "wallet_Info", default)]
	pub wallet_info: Vec<WalletInfo>,
}

impl ChainConfig {
	/// Websocket endpoint of the Tendermint RPC
	///
	/// `ws(s)://` URLs are used as-is. For `http(s)://` URLs the scheme is
	/// switched and the `/websocket` path appended.
	pub fn websocket_url(&self) -> String {
		let rpc = self.rpc.trim_end_matches('/');
		if rpc.starts_with("ws://") || rpc.starts_with("wss://") {
			return rpc.to_string();
		}
		if let Some(rest) = rpc.strip_prefix("https://") {
			return format!("wss://{}/websocket", rest);
		}
		if let Some(rest) = rpc.strip_prefix("http://") {
			return format!("ws://{}/websocket", rest);
		}
		format!("{}/websocket", rpc)
	}

	/// REST endpoint without a trailing slash
	pub fn rest_url(&self) -> &str {
		self.api.trim_end_matches('/')
	}
}

/// One (chain, address) pair to subscribe to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTarget {
	pub chain_name: String,
	pub streaming_endpoint: String,
	pub rest_endpoint: String,
	pub explorer_url: String,
	pub address: String,
}

impl WatchTarget {
	/// Builds one target per watched wallet of the chain
	pub fn from_chain(chain_name: &str, chain: &ChainConfig) -> Vec<Self> {
		let streaming_endpoint = chain.websocket_url();
		chain
			.wallet_info
			.iter()
			.map(|wallet| Self {
				chain_name: chain_name.to_string(),
				streaming_endpoint: streaming_endpoint.clone(),
				rest_endpoint: chain.rest_url().to_string(),
				explorer_url: chain.explorer_url.clone(),
				address: wallet.wallet_address.clone(),
			})
			.collect()
	}
}
