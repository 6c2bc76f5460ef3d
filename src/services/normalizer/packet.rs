//! IBC packet payload decoding.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{Map, Value};

/// Decodes a base64 JSON object into `(key, value)` pairs
///
/// Keys come out in the order of the decoded map. Anything that is not
/// base64 encoded JSON object yields `None`; the encoding is chosen by the
/// sending application and is not guaranteed to be readable.
pub fn decode_packet_data(data: &str) -> Option<Vec<(String, String)>> {
	let decoded = match STANDARD.decode(data) {
		Ok(decoded) => decoded,
		Err(e) => {
			tracing::debug!(error = %e, "Packet data is not base64");
			return None;
		}
	};

	let fields: Map<String, Value> = match serde_json::from_slice(&decoded) {
		Ok(fields) => fields,
		Err(e) => {
			tracing::debug!(error = %e, "Packet data is not a JSON object");
			return None;
		}
	};

	Some(
		fields
			.into_iter()
			.map(|(key, value)| {
				let value = match value {
					Value::String(s) => s,
					other => other.to_string(),
				};
				(key, value)
			})
			.collect(),
	)
}
