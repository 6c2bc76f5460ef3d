//! Cosmos SDK transaction messages.
//!
//! A message is keyed by its `@type` URL. The set of types the monitor knows
//! about is closed ([`MessageType`]); everything else is carried through as
//! [`MessageType::Other`] and still deserializes, with every optional field
//! that happens to be present.

use serde::Deserialize;
use serde_json::Value;

use crate::utils::parsing::{optional_string, string_or_number};

/// A `{denom, amount}` pair as returned by the Cosmos REST API
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Coin {
	#[serde(default, deserialize_with = "string_or_number")]
	pub denom: String,
	#[serde(default, deserialize_with = "string_or_number")]
	pub amount: String,
}

impl Coin {
	pub fn new(amount: impl Into<String>, denom: impl Into<String>) -> Self {
		Self {
			denom: denom.into(),
			amount: amount.into(),
		}
	}
}

/// Message types with dedicated handling
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageType {
	WithdrawDelegatorReward,
	WithdrawValidatorCommission,
	Delegate,
	IbcTransfer,
	Vote,
	Send,
	IbcUpdateClient,
	IbcRecvPacket,
	IbcAcknowledgement,
	/// Any other type URL, kept verbatim
	Other(String),
}

impl MessageType {
	/// Returns the `@type` URL of the message
	pub fn type_url(&self) -> &str {
		match self {
			Self::WithdrawDelegatorReward => {
				"/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward"
			}
			Self::WithdrawValidatorCommission => {
				"/cosmos.distribution.v1beta1.MsgWithdrawValidatorCommission"
			}
			Self::Delegate => "/cosmos.staking.v1beta1.MsgDelegate",
			Self::IbcTransfer => "/ibc.applications.transfer.v1.MsgTransfer",
			Self::Vote => "/cosmos.gov.v1beta1.MsgVote",
			Self::Send => "/cosmos.bank.v1beta1.MsgSend",
			Self::IbcUpdateClient => "/ibc.core.client.v1.MsgUpdateClient",
			Self::IbcRecvPacket => "/ibc.core.channel.v1.MsgRecvPacket",
			Self::IbcAcknowledgement => "/ibc.core.channel.v1.MsgAcknowledgement",
			Self::Other(type_url) => type_url,
		}
	}

	/// Human-readable label shown in alerts
	///
	/// Unknown types are labelled with their own type URL.
	pub fn action_label(&self) -> &str {
		match self {
			Self::WithdrawDelegatorReward => "Get Reward",
			Self::WithdrawValidatorCommission => "Get Commission",
			Self::Delegate => "Delegate",
			Self::IbcTransfer => "IBC Transfer",
			Self::Vote => "Vote",
			Self::Send => "Send",
			Self::IbcUpdateClient => "IBC Update Client",
			Self::IbcRecvPacket => "IBC Received",
			Self::IbcAcknowledgement => "IBC Acknowledgement",
			Self::Other(type_url) => type_url,
		}
	}

	/// Event type whose `amount` attribute holds the amount moved by this message
	///
	/// Returns `None` for types whose amount is not looked up in the execution events.
	pub fn amount_event_type(&self) -> Option<&'static str> {
		match self {
			Self::WithdrawDelegatorReward => Some("withdraw_rewards"),
			Self::WithdrawValidatorCommission => Some("withdraw_commission"),
			Self::Delegate => Some("delegate"),
			_ => None,
		}
	}
}

impl From<&str> for MessageType {
	fn from(type_url: &str) -> Self {
		match type_url {
			"/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward" => {
				Self::WithdrawDelegatorReward
			}
			"/cosmos.distribution.v1beta1.MsgWithdrawValidatorCommission" => {
				Self::WithdrawValidatorCommission
			}
			"/cosmos.staking.v1beta1.MsgDelegate" => Self::Delegate,
			"/ibc.applications.transfer.v1.MsgTransfer" => Self::IbcTransfer,
			"/cosmos.gov.v1beta1.MsgVote" => Self::Vote,
			"/cosmos.bank.v1beta1.MsgSend" => Self::Send,
			"/ibc.core.client.v1.MsgUpdateClient" => Self::IbcUpdateClient,
			"/ibc.core.channel.v1.MsgRecvPacket" => Self::IbcRecvPacket,
			"/ibc.core.channel.v1.MsgAcknowledgement" => Self::IbcAcknowledgement,
			other => Self::Other(other.to_string()),
		}
	}
}

/// Amount carried by the message itself
///
/// The JSON shape of `amount` depends on the message type, so it is resolved
/// once at parse time instead of being inspected at each use site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageAmount {
	/// `amount: {denom, amount}` (delegate)
	Single(Coin),
	/// `amount: [{denom, amount}, ...]` (bank send)
	List(Vec<Coin>),
	/// `token: {denom, amount}` (IBC transfer)
	Token(Coin),
}

impl MessageAmount {
	fn resolve(
		message_type: &MessageType,
		amount: Option<Value>,
		token: Option<Value>,
	) -> Option<Self> {
		let parsed = match message_type {
			MessageType::Send => amount.map(|v| serde_json::from_value(v).map(Self::List)),
			MessageType::Delegate => amount.map(|v| serde_json::from_value(v).map(Self::Single)),
			MessageType::IbcTransfer => token.map(|v| serde_json::from_value(v).map(Self::Token)),
			_ => None,
		};

		match parsed {
			Some(Ok(amount)) => Some(amount),
			Some(Err(e)) => {
				tracing::warn!(
					message_type = message_type.type_url(),
					error = %e,
					"Unexpected amount shape, ignoring message amount"
				);
				None
			}
			None => None,
		}
	}

	/// The coin displayed for this amount, if any
	pub fn primary(&self) -> Option<&Coin> {
		match self {
			Self::List(coins) => coins.first(),
			Self::Single(coin) | Self::Token(coin) => Some(coin),
		}
	}
}

/// IBC packet attached to receive/acknowledgement messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Packet {
	#[serde(default, deserialize_with = "optional_string")]
	pub sequence: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	pub source_port: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	pub source_channel: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	pub destination_port: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	pub destination_channel: Option<String>,
	/// Base64 encoded payload, format chosen by the sending application
	#[serde(default, deserialize_with = "optional_string")]
	pub data: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	pub timeout_timestamp: Option<String>,
}

/// Wire shape of a message, before the type tag is interpreted
#[derive(Debug, Default, Deserialize)]
struct RawMessage {
	#[serde(rename = "@type", default)]
	type_url: String,
	#[serde(default, deserialize_with = "optional_string")]
	delegator_address: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	validator_address: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	from_address: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	to_address: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	sender: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	receiver: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	source_port: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	destination_port: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	source_channel: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	destination_channel: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	proposal_id: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	voter: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	option: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	signer: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	client_id: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	timeout_timestamp: Option<String>,
	#[serde(default, deserialize_with = "optional_string")]
	sequence: Option<String>,
	#[serde(default)]
	amount: Option<Value>,
	#[serde(default)]
	token: Option<Value>,
	#[serde(default)]
	packet: Option<Value>,
}

/// A single operation inside a transaction body
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawMessage")]
pub struct Message {
	pub message_type: MessageType,
	pub delegator_address: Option<String>,
	pub validator_address: Option<String>,
	pub from_address: Option<String>,
	pub to_address: Option<String>,
	pub sender: Option<String>,
	pub receiver: Option<String>,
	pub source_port: Option<String>,
	pub destination_port: Option<String>,
	pub source_channel: Option<String>,
	pub destination_channel: Option<String>,
	pub proposal_id: Option<String>,
	pub voter: Option<String>,
	pub option: Option<String>,
	pub signer: Option<String>,
	pub client_id: Option<String>,
	pub timeout_timestamp: Option<String>,
	pub sequence: Option<String>,
	pub amount: Option<MessageAmount>,
	pub packet: Option<Packet>,
}

impl From<RawMessage> for Message {
	fn from(raw: RawMessage) -> Self {
		let message_type = MessageType::from(raw.type_url.as_str());
		let amount = MessageAmount::resolve(&message_type, raw.amount, raw.token);
		let packet = raw.packet.and_then(|value| match serde_json::from_value::<Packet>(value) {
			Ok(packet) => Some(packet),
			Err(e) => {
				tracing::warn!(
					message_type = message_type.type_url(),
					error = %e,
					"Unexpected packet shape, ignoring packet"
				);
				None
			}
		});

		Self {
			message_type,
			delegator_address: raw.delegator_address,
			validator_address: raw.validator_address,
			from_address: raw.from_address,
			to_address: raw.to_address,
			sender: raw.sender,
			receiver: raw.receiver,
			source_port: raw.source_port,
			destination_port: raw.destination_port,
			source_channel: raw.source_channel,
			destination_channel: raw.destination_channel,
			proposal_id: raw.proposal_id,
			voter: raw.voter,
			option: raw.option,
			signer: raw.signer,
			client_id: raw.client_id,
			timeout_timestamp: raw.timeout_timestamp,
			sequence: raw.sequence,
			amount,
			packet,
		}
	}
}
