//! Amount and denomination parsing.
//!
//! On-chain amounts are integers in the smallest unit of a denomination
//! (`354817ungm`). Display values divide by one million and drop the `u`
//! prefix of the denomination (`0.354817 ngm`).

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use crate::{
	models::{Coin, TxResponse},
	utils::constants::MICRO_UNIT_DIVISOR,
};

lazy_static! {
	static ref LEADING_DIGITS: Regex = Regex::new(r"^[0-9]+").expect("valid regex");
	static ref NON_LETTERS: Regex = Regex::new(r"[^a-zA-Z]+").expect("valid regex");
}

/// Returns the leading run of decimal digits of `value`, or 0 if there is none
pub fn extract_number(value: &str) -> f64 {
	let Some(digits) = LEADING_DIGITS.find(value) else {
		tracing::debug!(value, "No leading number found");
		return 0.0;
	};

	digits.as_str().parse().unwrap_or_else(|e| {
		tracing::debug!(value, error = %e, "Failed to convert leading digits");
		0.0
	})
}

/// Returns the letters of `value` with a single leading `u` removed
pub fn extract_denom(value: &str) -> String {
	let letters = NON_LETTERS.replace_all(value, "");
	letters.strip_prefix('u').unwrap_or(&letters).to_string()
}

/// An amount converted out of micro-units, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayAmount {
	pub amount: f64,
	pub denom: String,
}

impl DisplayAmount {
	pub fn from_parts(amount: &str, denom: &str) -> Self {
		Self {
			amount: extract_number(amount) / MICRO_UNIT_DIVISOR,
			denom: extract_denom(denom),
		}
	}

	pub fn from_coin(coin: &Coin) -> Self {
		Self::from_parts(&coin.amount, &coin.denom)
	}

	/// Parses a combined event attribute value such as `1000uatom`
	pub fn from_attribute(value: &str) -> Self {
		Self::from_parts(value, value)
	}

	pub fn is_zero(&self) -> bool {
		self.amount == 0.0
	}
}

impl fmt::Display for DisplayAmount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:.6} {}", self.amount, self.denom)
	}
}

/// Looks up the amount moved by the message at `msg_index` in the execution output
///
/// Per-message logs are authoritative whenever the node returned any; the
/// top-level event list is only consulted when there are no logs at all.
pub fn resolve_event_amount(
	response: &TxResponse,
	msg_index: u64,
	event_type: &str,
) -> Option<DisplayAmount> {
	let amount = if response.logs.is_empty() {
		response
			.events
			.iter()
			.filter(|event| event.event_type == event_type)
			.find_map(|event| event.attribute("amount"))
	} else {
		response
			.logs
			.iter()
			.filter(|log| log.msg_index == msg_index)
			.flat_map(|log| log.events.iter())
			.filter(|event| event.event_type == event_type)
			.find_map(|event| event.attribute("amount"))
	};

	amount.map(DisplayAmount::from_attribute)
}
