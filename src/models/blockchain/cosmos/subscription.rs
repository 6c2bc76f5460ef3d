//! Tendermint/CometBFT websocket subscription frames.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Event key carrying the hash of the matched transaction
pub const TX_HASH_EVENT_KEY: &str = "tx.hash";

/// JSON-RPC `subscribe` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscribeRequest {
	pub jsonrpc: &'static str,
	pub method: &'static str,
	pub params: Vec<String>,
	pub id: u64,
}

impl SubscribeRequest {
	/// Subscribes to transfers sent by `address`
	///
	/// Only the sender side is filtered; transfers received by the address
	/// do not match this query.
	pub fn transfer_sender(address: &str) -> Self {
		Self {
			jsonrpc: "2.0",
			method: "subscribe",
			params: vec![format!("transfer.sender='{}'", address)],
			id: 1,
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscriptionResult {
	#[serde(default)]
	pub query: Option<String>,
	#[serde(default)]
	pub events: HashMap<String, Vec<String>>,
}

/// Inbound frame pushed by the node
///
/// Subscription acknowledgements deserialize with an empty `result` and carry
/// no hash. Rejections from the node carry a JSON-RPC `error` instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscriptionMessage {
	#[serde(default)]
	pub result: SubscriptionResult,
	#[serde(default)]
	pub error: Option<Value>,
}

impl SubscriptionMessage {
	/// Hash of the transaction that triggered this frame, if any
	pub fn tx_hash(&self) -> Option<&str> {
		self.result
			.events
			.get(TX_HASH_EVENT_KEY)
			.and_then(|values| values.first())
			.map(String::as_str)
	}
}
