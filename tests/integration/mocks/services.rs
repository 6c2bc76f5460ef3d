//! Mock implementations of the fetcher and notifier traits.
//!
//! - [`MockTransactionFetcher`] - stands in for the Cosmos REST client
//! - [`MockNotifier`] - stands in for a notification channel

use async_trait::async_trait;
use cosmos_tx_monitor::{
	models::{Alert, RawTransaction},
	services::{
		blockchain::{FetchError, TransactionFetcher},
		notification::{NotificationError, Notifier},
	},
};
use mockall::mock;

mock! {
	/// Mock implementation of the transaction fetcher.
	pub TransactionFetcher {}

	#[async_trait]
	impl TransactionFetcher for TransactionFetcher {
		async fn fetch(
			&self,
			rest_endpoint: &str,
			tx_hash: &str,
		) -> Result<RawTransaction, FetchError>;
	}
}

mock! {
	/// Mock implementation of a notification channel.
	pub Notifier {}

	#[async_trait]
	impl Notifier for Notifier {
		fn name(&self) -> &'static str;
		async fn notify(&self, alert: &Alert) -> Result<(), NotificationError>;
	}
}

/// A REST response body for a single `MsgSend` of `amount` uatom
pub fn send_transaction_json(tx_hash: &str, amount: &str) -> String {
	serde_json::json!({
		"tx": {
			"body": {
				"messages": [{
					"@type": "/cosmos.bank.v1beta1.MsgSend",
					"from_address": "cosmos1sender",
					"to_address": "cosmos1receiver",
					"amount": [{"denom": "uatom", "amount": amount}]
				}],
				"memo": "rent"
			},
			"auth_info": {
				"fee": {"amount": [{"denom": "uatom", "amount": "5000"}], "gas_limit": "200000"}
			}
		},
		"tx_response": {
			"height": "19000000",
			"txhash": tx_hash,
			"code": 0,
			"raw_log": "",
			"timestamp": "2024-01-01T00:00:00Z",
			"logs": [],
			"events": []
		}
	})
	.to_string()
}
