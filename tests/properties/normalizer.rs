use crate::properties::strategies::{coin_strategy, transaction_strategy};
use cosmos_tx_monitor::services::normalizer::{
	extract_denom, extract_number, normalize, DisplayAmount,
};
use proptest::{prelude::*, test_runner::Config};

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_extract_number_reads_leading_digits(
		digits in "[0-9]{1,15}",
		suffix in "[a-z/]{1,10}[0-9]{0,3}",
	) {
		let value = format!("{}{}", digits, suffix);
		let expected: f64 = digits.parse().unwrap();
		prop_assert_eq!(extract_number(&value), expected);
	}

	#[test]
	fn test_extract_number_without_leading_digit_is_zero(value in "[^0-9][a-zA-Z0-9 ]{0,10}") {
		prop_assert_eq!(extract_number(&value), 0.0);
	}

	#[test]
	fn test_extract_denom_keeps_only_letters(value in "\\PC{0,20}") {
		let denom = extract_denom(&value);
		prop_assert!(denom.chars().all(|c| c.is_ascii_alphabetic()));
	}

	#[test]
	fn test_extract_denom_drops_micro_prefix(name in "[a-z]{1,8}", amount in "[0-9]{0,8}") {
		prop_assert_eq!(extract_denom(&format!("{}u{}", amount, name)), name);
	}

	#[test]
	fn test_display_amount_has_six_decimals(coin in coin_strategy()) {
		let rendered = DisplayAmount::from_coin(&coin).to_string();
		let (number, denom) = rendered.split_once(' ').unwrap();
		let (_, decimals) = number.split_once('.').unwrap();
		prop_assert_eq!(decimals.len(), 6);
		prop_assert_eq!(denom, extract_denom(&coin.denom));
	}

	#[test]
	fn test_normalize_never_emits_empty_details(raw in transaction_strategy()) {
		let alert = normalize(&raw);
		let messages = &raw.tx.body.messages;

		prop_assert!(alert.message_details.len() <= messages.len());
		for detail in &alert.message_details {
			prop_assert!(!detail.attributes.is_empty());
			prop_assert!(detail.index >= 1 && detail.index <= messages.len());
			prop_assert_eq!(
				detail.action.as_str(),
				messages[detail.index - 1].message_type.action_label()
			);
		}
		prop_assert!(alert
			.message_details
			.windows(2)
			.all(|pair| pair[0].index < pair[1].index));
	}

	#[test]
	fn test_normalize_header_fields(raw in transaction_strategy()) {
		let alert = normalize(&raw);

		prop_assert_eq!(&alert.tx_hash, &raw.tx_response.txhash);
		prop_assert_eq!(alert.error.is_some(), raw.tx_response.code != 0);
		prop_assert_eq!(alert.fee == "0", raw.tx.auth_info.fee.amount.is_empty());
		prop_assert!(alert.chain_name.is_empty());
	}
}
