//! Shared JSON webhook delivery.

use reqwest::Client;
use serde_json::Value;

use crate::services::notification::NotificationError;

/// POSTs JSON payloads to a single URL
///
/// Each call performs exactly one request; a non-2xx answer is an error.
#[derive(Clone, Debug)]
pub struct BaseWebhookNotifier {
	/// Identifies the channel in logs and errors
	pub name: &'static str,
	pub url: String,
	pub client: Client,
}

impl BaseWebhookNotifier {
	pub fn new(name: &'static str, url: String, client: Client) -> Self {
		Self { name, url, client }
	}

	pub async fn post(&self, payload: &Value) -> Result<(), NotificationError> {
		let response = self.client.post(&self.url).json(payload).send().await?;

		let status = response.status();
		if !status.is_success() {
			return Err(NotificationError::Status {
				notifier: self.name,
				status: status.as_u16(),
			});
		}

		Ok(())
	}
}
