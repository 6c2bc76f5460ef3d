//! Discord notification implementation.
//!
//! Sends alerts to a Discord channel via a webhook as a single embed.

use async_trait::async_trait;
use reqwest::Client;

use crate::{
	models::{Alert, DiscordConfig},
	services::notification::{
		AlertPayloadBuilder, BaseWebhookNotifier, DiscordPayloadBuilder, NotificationError,
		Notifier,
	},
};

/// Implementation of Discord notifications via webhooks
pub struct DiscordNotifier {
	base: BaseWebhookNotifier,
}

impl DiscordNotifier {
	pub fn new(webhook_url: String, client: Client) -> Self {
		Self {
			base: BaseWebhookNotifier::new("discord", webhook_url, client),
		}
	}

	/// Creates a Discord notifier from the alerting configuration
	///
	/// Returns `None` when the channel is disabled.
	pub fn from_config(config: &DiscordConfig, client: Client) -> Option<Self> {
		config
			.enable
			.then(|| Self::new(config.webhook_url.clone(), client))
	}
}

#[async_trait]
impl Notifier for DiscordNotifier {
	fn name(&self) -> &'static str {
		self.base.name
	}

	async fn notify(&self, alert: &Alert) -> Result<(), NotificationError> {
		let payload = DiscordPayloadBuilder.build_payload(alert);
		self.base.post(&payload).await
	}
}
