#![no_main]

use cosmos_tx_monitor::{models::SubscriptionMessage, services::normalizer::decode_packet_data};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	if let Ok(message) = serde_json::from_slice::<SubscriptionMessage>(data) {
		let _ = message.tx_hash();
	}
	if let Ok(text) = std::str::from_utf8(data) {
		let _ = decode_packet_data(text);
	}
});
