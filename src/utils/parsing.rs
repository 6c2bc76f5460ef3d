//! Parsing utilities
//!
//! Serde helpers for the Cosmos REST API, which encodes 64-bit integers as
//! JSON strings on most endpoints but not all of them.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_string(value: Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(s) => Some(s),
		other => Some(other.to_string()),
	}
}

/// Deserializes any scalar into `Some(String)`; `null` becomes `None`
pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Option::<Value>::deserialize(deserializer)?;
	Ok(value.and_then(value_to_string))
}

/// Deserializes a string or a number into a `String`; `null` becomes empty
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(optional_string(deserializer)?.unwrap_or_default())
}

/// Deserializes a `u64` given either as a number or a numeric string
pub fn u64_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
	D: Deserializer<'de>,
{
	match Option::<Value>::deserialize(deserializer)? {
		None | Some(Value::Null) => Ok(0),
		Some(Value::Number(n)) => n
			.as_u64()
			.ok_or_else(|| serde::de::Error::custom(format!("invalid u64: {}", n))),
		Some(Value::String(s)) => s
			.parse()
			.map_err(|_| serde::de::Error::custom(format!("invalid u64: {}", s))),
		Some(other) => Err(serde::de::Error::custom(format!(
			"expected u64, found {}",
			other
		))),
	}
}
