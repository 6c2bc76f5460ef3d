//! Alert pipeline records.
//!
//! [`TxEvent`] is what watchers push into the fan-in queue; [`Alert`] is the
//! normalized, display-ready record handed to notification channels.

use serde::{ser::SerializeMap, Serialize, Serializer};

/// A transaction detected by a watcher
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxEvent {
	pub chain_name: String,
	pub tx_hash: String,
}

impl TxEvent {
	pub fn new(chain_name: impl Into<String>, tx_hash: impl Into<String>) -> Self {
		Self {
			chain_name: chain_name.into(),
			tx_hash: tx_hash.into(),
		}
	}
}

/// One labelled value of a message detail
///
/// Serialized as a single-key JSON object, `{"<key>": "<value>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertAttribute {
	pub key: String,
	pub value: String,
}

impl AlertAttribute {
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
		}
	}
}

impl Serialize for AlertAttribute {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(1))?;
		map.serialize_entry(&self.key, &self.value)?;
		map.end()
	}
}

/// Normalized view of a single transaction message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageDetail {
	/// One-based position of the message in the transaction body
	pub index: usize,
	pub action: String,
	pub attributes: Vec<AlertAttribute>,
}

impl MessageDetail {
	pub fn new(index: usize, action: impl Into<String>) -> Self {
		Self {
			index,
			action: action.into(),
			attributes: Vec::new(),
		}
	}

	pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.attributes.push(AlertAttribute::new(key, value));
	}

	pub fn push_optional(&mut self, key: &str, value: Option<&String>) {
		if let Some(value) = value {
			self.push(key, value.as_str());
		}
	}

	pub fn is_empty(&self) -> bool {
		self.attributes.is_empty()
	}
}

/// Chain-agnostic summary of a transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Alert {
	pub tx_hash: String,
	pub height: String,
	pub timestamp: String,
	pub chain_name: String,
	pub explorer_url: String,
	/// `"<amount> <denom>"`, or `"0"` when the transaction paid no fee
	pub fee: String,
	pub memo: String,
	/// Raw log of a failed transaction
	pub error: Option<String>,
	pub message_details: Vec<MessageDetail>,
}

impl Alert {
	/// Link to the transaction on the chain explorer
	pub fn explorer_link(&self) -> String {
		format!("{}{}", self.explorer_url, self.tx_hash)
	}
}
