//! Notification service implementation.
//!
//! This module provides functionality to send alerts through the configured
//! notification channels:
//!
//! - Slack (incoming webhook, Block Kit)
//! - Discord (webhook embed)
//! - Telegram (Bot API `sendMessage`)

use async_trait::async_trait;
use reqwest::Client;

mod discord;
mod error;
mod payload_builder;
mod slack;
mod telegram;
mod webhook;

pub use discord::DiscordNotifier;
pub use error::NotificationError;
pub use payload_builder::{
	unix_timestamp, AlertPayloadBuilder, DiscordPayloadBuilder, SlackPayloadBuilder,
	TelegramPayloadBuilder,
};
pub use slack::SlackNotifier;
pub use telegram::TelegramNotifier;
pub use webhook::BaseWebhookNotifier;

use crate::models::{Alert, AlertingConfig};

/// Interface for notification implementations
///
/// A notifier delivers one alert with exactly one outbound request and
/// reports failure through its return value.
#[async_trait]
pub trait Notifier: Send + Sync {
	/// Short channel name used in logs
	fn name(&self) -> &'static str;

	/// Sends `alert` to the channel
	async fn notify(&self, alert: &Alert) -> Result<(), NotificationError>;
}

/// Fans an alert out to every enabled channel
pub struct NotificationService {
	notifiers: Vec<Box<dyn Notifier>>,
}

impl NotificationService {
	pub fn new(notifiers: Vec<Box<dyn Notifier>>) -> Self {
		Self { notifiers }
	}

	/// Builds a notifier for every enabled channel, in Slack, Discord, Telegram order
	pub fn from_config(config: &AlertingConfig, client: Client) -> Self {
		let mut notifiers: Vec<Box<dyn Notifier>> = Vec::new();

		if let Some(notifier) = SlackNotifier::from_config(&config.slack, client.clone()) {
			notifiers.push(Box::new(notifier));
		}
		if let Some(notifier) = DiscordNotifier::from_config(&config.discord, client.clone()) {
			notifiers.push(Box::new(notifier));
		}
		if let Some(notifier) = TelegramNotifier::from_config(&config.telegram, client) {
			notifiers.push(Box::new(notifier));
		}

		if notifiers.is_empty() {
			tracing::warn!("No notification channel enabled, alerts will only be logged");
		}

		Self { notifiers }
	}

	pub fn len(&self) -> usize {
		self.notifiers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.notifiers.is_empty()
	}

	/// Names of the enabled channels, in delivery order
	pub fn channels(&self) -> Vec<&'static str> {
		self.notifiers.iter().map(|n| n.name()).collect()
	}

	/// Sends `alert` through every channel in sequence
	///
	/// A failing channel is logged and does not stop delivery to the others.
	/// Returns the number of channels that accepted the alert.
	pub async fn send_all(&self, alert: &Alert) -> usize {
		let mut delivered = 0;
		for notifier in &self.notifiers {
			match notifier.notify(alert).await {
				Ok(()) => {
					delivered += 1;
					tracing::info!(
						notifier = notifier.name(),
						chain = %alert.chain_name,
						tx_hash = %alert.tx_hash,
						"Alert sent"
					);
				}
				Err(e) => {
					tracing::error!(
						notifier = notifier.name(),
						chain = %alert.chain_name,
						tx_hash = %alert.tx_hash,
						error = %e,
						"Failed to send alert"
					);
				}
			}
		}
		delivered
	}
}
