//! Type-agnostic attribute population for message details.

use crate::{
	models::{Message, MessageDetail, Packet},
	services::normalizer::packet::decode_packet_data,
};

/// Appends every populated address/port/channel/governance field of `message`
///
/// Keys are emitted in a fixed order regardless of the message type, so
/// unknown message types still produce a readable summary.
pub fn push_message_fields(detail: &mut MessageDetail, message: &Message) {
	let fields = [
		("Delegator Address", &message.delegator_address),
		("Validator Address", &message.validator_address),
		("From Address", &message.from_address),
		("To Address", &message.to_address),
		("Sender", &message.sender),
		("Receiver", &message.receiver),
		("Source Port", &message.source_port),
		("Destination Port", &message.destination_port),
		("Source Channel", &message.source_channel),
		("Destination Channel", &message.destination_channel),
		("Proposal Id", &message.proposal_id),
		("Voter", &message.voter),
		("Option", &message.option),
		("Signer", &message.signer),
		("Client ID", &message.client_id),
		("Timeout Timestamp", &message.timeout_timestamp),
		("Sequence", &message.sequence),
	];

	for (key, value) in fields {
		detail.push_optional(key, value.as_ref());
	}
}

/// Appends the routing fields of `packet` followed by its decoded payload
pub fn push_packet_fields(detail: &mut MessageDetail, packet: &Packet) {
	let fields = [
		("Sequence", &packet.sequence),
		("Source Port", &packet.source_port),
		("Source Channel", &packet.source_channel),
		("Destination Port", &packet.destination_port),
		("Destination Channel", &packet.destination_channel),
	];

	for (key, value) in fields {
		detail.push_optional(key, value.as_ref());
	}

	let Some(data) = packet.data.as_deref() else {
		return;
	};

	if let Some(decoded) = decode_packet_data(data) {
		for (key, value) in decoded {
			detail.push(key, value);
		}
	}
}
