//! Slack notification implementation.
//!
//! Sends alerts to a Slack channel via an incoming webhook, formatted as
//! Block Kit sections.

use async_trait::async_trait;
use reqwest::Client;

use crate::{
	models::{Alert, SlackConfig},
	services::notification::{
		AlertPayloadBuilder, BaseWebhookNotifier, NotificationError, Notifier,
		SlackPayloadBuilder,
	},
};

/// Implementation of Slack notifications via webhooks
pub struct SlackNotifier {
	base: BaseWebhookNotifier,
}

impl SlackNotifier {
	/// Creates a new Slack notifier instance
	///
	/// # Arguments
	/// * `webhook_url` - Slack webhook URL
	/// * `client` - HTTP client used for delivery
	pub fn new(webhook_url: String, client: Client) -> Self {
		Self {
			base: BaseWebhookNotifier::new("slack", webhook_url, client),
		}
	}

	/// Creates a Slack notifier from the alerting configuration
	///
	/// Returns `None` when the channel is disabled.
	pub fn from_config(config: &SlackConfig, client: Client) -> Option<Self> {
		config
			.enable
			.then(|| Self::new(config.webhook_url.clone(), client))
	}
}

#[async_trait]
impl Notifier for SlackNotifier {
	fn name(&self) -> &'static str {
		self.base.name
	}

	async fn notify(&self, alert: &Alert) -> Result<(), NotificationError> {
		let payload = SlackPayloadBuilder.build_payload(alert);
		self.base.post(&payload).await
	}
}
