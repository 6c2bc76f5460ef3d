//! Telegram notification implementation.
//!
//! Sends alerts through the Bot API `sendMessage` method with Markdown
//! formatting.

use async_trait::async_trait;
use reqwest::Client;

use crate::{
	models::{Alert, TelegramConfig},
	services::notification::{
		AlertPayloadBuilder, BaseWebhookNotifier, NotificationError, Notifier,
		TelegramPayloadBuilder,
	},
	utils::constants::TELEGRAM_API_URL,
};

/// Implementation of Telegram notifications via the Bot API
pub struct TelegramNotifier {
	base: BaseWebhookNotifier,
	builder: TelegramPayloadBuilder,
}

impl TelegramNotifier {
	/// Creates a new Telegram notifier instance
	///
	/// # Arguments
	/// * `base_url` - Bot API root, defaults to `https://api.telegram.org`
	/// * `token` - Telegram bot token
	/// * `chat_id` - Telegram chat ID
	/// * `client` - HTTP client used for delivery
	pub fn new(base_url: Option<String>, token: &str, chat_id: String, client: Client) -> Self {
		let base_url = base_url.unwrap_or_else(|| TELEGRAM_API_URL.to_string());
		Self {
			base: BaseWebhookNotifier::new(
				"telegram",
				format!("{}/bot{}/sendMessage", base_url.trim_end_matches('/'), token),
				client,
			),
			builder: TelegramPayloadBuilder { chat_id },
		}
	}

	/// Creates a Telegram notifier from the alerting configuration
	///
	/// Returns `None` when the channel is disabled.
	pub fn from_config(config: &TelegramConfig, client: Client) -> Option<Self> {
		config.enable.then(|| {
			Self::new(
				None,
				&config.bot_token,
				config.chat_id.clone(),
				client,
			)
		})
	}
}

#[async_trait]
impl Notifier for TelegramNotifier {
	fn name(&self) -> &'static str {
		self.base.name
	}

	async fn notify(&self, alert: &Alert) -> Result<(), NotificationError> {
		let payload = self.builder.build_payload(alert);
		self.base.post(&payload).await
	}
}
