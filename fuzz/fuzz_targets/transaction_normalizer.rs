#![no_main]

use cosmos_tx_monitor::{models::RawTransaction, services::normalizer::normalize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	if let Ok(raw) = serde_json::from_slice::<RawTransaction>(data) {
		let alert = normalize(&raw);
		assert!(alert.message_details.iter().all(|d| !d.is_empty()));
	}
});
