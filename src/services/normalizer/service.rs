//! Conversion of fetched transactions into alerts.

use crate::{
	models::{Alert, Message, MessageDetail, RawTransaction, TxResponse},
	services::normalizer::{
		amount::{resolve_event_amount, DisplayAmount},
		fields::{push_message_fields, push_packet_fields},
	},
};

/// Builds an [`Alert`] from a fetched transaction
///
/// `chain_name` and `explorer_url` are left empty; they belong to the route
/// the transaction was observed on, not to the transaction itself.
pub fn normalize(raw: &RawTransaction) -> Alert {
	let response = &raw.tx_response;
	let body = &raw.tx.body;

	let fee = raw
		.tx
		.auth_info
		.fee
		.amount
		.first()
		.map(|coin| DisplayAmount::from_coin(coin).to_string())
		.unwrap_or_else(|| "0".to_string());

	let error = raw.is_failed().then(|| response.raw_log.clone());

	let message_details = body
		.messages
		.iter()
		.enumerate()
		.filter_map(|(position, message)| describe_message(response, position, message))
		.collect();

	Alert {
		tx_hash: response.txhash.clone(),
		height: response.height.clone(),
		timestamp: response.timestamp.clone(),
		fee,
		memo: body.memo.clone(),
		error,
		message_details,
		..Default::default()
	}
}

/// Summarizes the message at zero-based `position`
///
/// Returns `None` when the message has nothing worth displaying.
pub fn describe_message(
	response: &TxResponse,
	position: usize,
	message: &Message,
) -> Option<MessageDetail> {
	let message_type = &message.message_type;
	let mut detail = MessageDetail::new(position + 1, message_type.action_label());

	let amount = match message_type.amount_event_type() {
		Some(event_type) => resolve_event_amount(response, position as u64, event_type),
		None => message
			.amount
			.as_ref()
			.and_then(|amount| amount.primary())
			.map(DisplayAmount::from_coin),
	};

	push_message_fields(&mut detail, message);

	if let Some(amount) = amount.filter(|amount| !amount.is_zero()) {
		detail.push("Amount", amount.to_string());
	}

	if let Some(packet) = &message.packet {
		push_packet_fields(&mut detail, packet);
	}

	if detail.is_empty() {
		tracing::debug!(
			index = detail.index,
			action = %detail.action,
			"Dropping message without attributes"
		);
		return None;
	}

	Some(detail)
}
