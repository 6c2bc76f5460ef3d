//! Transaction envelope returned by `GET /cosmos/tx/v1beta1/txs/{hash}`.

use serde::Deserialize;

use crate::{
	models::blockchain::cosmos::{Coin, Message},
	utils::parsing::{string_or_number, u64_or_string},
};

/// Key/value pair of an ABCI event
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventAttribute {
	#[serde(default)]
	pub key: String,
	#[serde(default, deserialize_with = "string_or_number")]
	pub value: String,
}

/// ABCI event emitted during transaction execution
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Event {
	#[serde(rename = "type", default)]
	pub event_type: String,
	#[serde(default)]
	pub attributes: Vec<EventAttribute>,
}

impl Event {
	/// Value of the first attribute with the given key
	pub fn attribute(&self, key: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|attr| attr.key == key)
			.map(|attr| attr.value.as_str())
	}
}

/// Execution log of a single message
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Log {
	/// Zero-based position of the message in the body; omitted by the node when 0
	#[serde(default, deserialize_with = "u64_or_string")]
	pub msg_index: u64,
	#[serde(default)]
	pub events: Vec<Event>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Fee {
	#[serde(default)]
	pub amount: Vec<Coin>,
	#[serde(default)]
	pub gas_limit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthInfo {
	#[serde(default)]
	pub fee: Fee,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TxBody {
	#[serde(default)]
	pub messages: Vec<Message>,
	#[serde(default)]
	pub memo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Tx {
	#[serde(default)]
	pub body: TxBody,
	#[serde(default)]
	pub auth_info: AuthInfo,
}

/// Execution result of a transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TxResponse {
	#[serde(default, deserialize_with = "string_or_number")]
	pub height: String,
	#[serde(default)]
	pub txhash: String,
	/// Zero on success
	#[serde(default)]
	pub code: u32,
	#[serde(default)]
	pub raw_log: String,
	#[serde(default)]
	pub timestamp: String,
	/// Per-message logs; empty on nodes that no longer populate them
	#[serde(default)]
	pub logs: Vec<Log>,
	#[serde(default)]
	pub events: Vec<Event>,
}

/// Full transaction record: body plus execution result
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawTransaction {
	#[serde(default)]
	pub tx: Tx,
	#[serde(default)]
	pub tx_response: TxResponse,
}

impl RawTransaction {
	/// Whether the transaction failed on chain
	pub fn is_failed(&self) -> bool {
		self.tx_response.code != 0
	}
}
