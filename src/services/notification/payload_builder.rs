//! Alert payload builder implementation.
//!
//! This module renders an [`Alert`] into the request body expected by each
//! notification service (Slack, Discord, Telegram).

use chrono::DateTime;
use serde_json::{json, Value};

use crate::models::Alert;

/// Color of the Discord embed side bar
const DISCORD_EMBED_COLOR: u32 = 15258703;

const DISCORD_USERNAME: &str = "Transaction Bot";

/// Zero-width space; Discord rejects empty field names and values
const DISCORD_SPACER: &str = "\u{200B}";

/// Trait for building notification payloads.
pub trait AlertPayloadBuilder: Send + Sync {
	/// Builds the JSON request body for `alert`.
	fn build_payload(&self, alert: &Alert) -> Value;
}

/// Seconds since the epoch of an RFC 3339 timestamp, or 0 if it does not parse
pub fn unix_timestamp(timestamp: &str) -> i64 {
	match DateTime::parse_from_rfc3339(timestamp) {
		Ok(parsed) => parsed.timestamp(),
		Err(e) => {
			tracing::debug!(timestamp, error = %e, "Unparseable transaction timestamp");
			0
		}
	}
}

/// A payload builder for Slack Block Kit messages.
pub struct SlackPayloadBuilder;

impl SlackPayloadBuilder {
	fn section(text: String) -> Value {
		json!({
			"type": "section",
			"text": { "type": "mrkdwn", "text": text }
		})
	}
}

impl AlertPayloadBuilder for SlackPayloadBuilder {
	fn build_payload(&self, alert: &Alert) -> Value {
		let mut blocks = vec![
			Self::section(format!(
				"*{} New Transaction*\n<{}|View on Explorer>",
				alert.chain_name,
				alert.explorer_link()
			)),
			Self::section(format!("Transaction: `{}`", alert.tx_hash)),
			Self::section(format!(
				"Height: `{}`\nFees: `{}`\nMemo : `{}`",
				alert.height, alert.fee, alert.memo
			)),
		];

		for detail in &alert.message_details {
			blocks.push(json!({ "type": "divider" }));
			blocks.push(Self::section(format!(
				"*#{} {}*",
				detail.index, detail.action
			)));

			let fields: Vec<Value> = detail
				.attributes
				.iter()
				.map(|attribute| {
					json!({
						"type": "mrkdwn",
						"text": format!("*{}:*\n`{}`", attribute.key, attribute.value)
					})
				})
				.collect();

			if !fields.is_empty() {
				blocks.push(json!({ "type": "section", "fields": fields }));
			}
		}

		json!({ "blocks": blocks })
	}
}

/// A payload builder for Discord webhooks.
pub struct DiscordPayloadBuilder;

impl AlertPayloadBuilder for DiscordPayloadBuilder {
	fn build_payload(&self, alert: &Alert) -> Value {
		let mut fields = Vec::new();
		for detail in &alert.message_details {
			fields.push(json!({
				"name": DISCORD_SPACER,
				"value": DISCORD_SPACER,
				"inline": false
			}));
			fields.push(json!({
				"name": format!("#{} {}", detail.index, detail.action),
				"value": "_ _",
				"inline": false
			}));
			for attribute in &detail.attributes {
				fields.push(json!({
					"name": attribute.key,
					"value": format!("`{}`", attribute.value),
					"inline": true
				}));
			}
		}

		let embed = json!({
			"title": format!(
				"{} New Transaction (<t:{}>)",
				alert.chain_name,
				unix_timestamp(&alert.timestamp)
			),
			"description": format!(
				"[Txs Hash]({}) : *`{}`*\nHeight : `{}`\nFees : `{}`\n Memo : `{}`",
				alert.explorer_link(),
				alert.tx_hash,
				alert.height,
				alert.fee,
				alert.memo
			),
			"color": DISCORD_EMBED_COLOR,
			"fields": fields
		});

		json!({
			"username": DISCORD_USERNAME,
			"embeds": [embed]
		})
	}
}

/// A payload builder for the Telegram `sendMessage` method.
pub struct TelegramPayloadBuilder {
	pub chat_id: String,
}

impl TelegramPayloadBuilder {
	/// Renders the Markdown message text
	pub fn format_text(alert: &Alert) -> String {
		let mut text = format!(
			"*{} New Transaction*\n[View on Explorer]({})\n",
			alert.chain_name,
			alert.explorer_link()
		);
		if let Some(error) = alert.error.as_deref().filter(|e| !e.is_empty()) {
			text.push_str(&format!("Error: ```{}```\n", error));
		}
		text.push_str(&format!("Transaction: `{}`\n", alert.tx_hash));
		text.push_str(&format!(
			"Height: `{}`\nFees: `{}`\nMemo: `{}`",
			alert.height, alert.fee, alert.memo
		));

		for detail in &alert.message_details {
			text.push_str(&format!("\n*#{} {}*\n", detail.index, detail.action));
			for attribute in &detail.attributes {
				text.push_str(&format!("*{}:* `{}`\n", attribute.key, attribute.value));
			}
		}

		text
	}
}

impl AlertPayloadBuilder for TelegramPayloadBuilder {
	fn build_payload(&self, alert: &Alert) -> Value {
		json!({
			"chat_id": self.chat_id,
			"text": Self::format_text(alert),
			"parse_mode": "Markdown"
		})
	}
}
