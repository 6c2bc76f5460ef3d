use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SlackConfig {
	#[serde(default)]
	pub enable: bool,
	#[serde(default)]
	pub webhook_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DiscordConfig {
	#[serde(default)]
	pub enable: bool,
	#[serde(default)]
	pub webhook_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TelegramConfig {
	#[serde(default)]
	pub enable: bool,
	#[serde(default)]
	pub bot_token: String,
	#[serde(default)]
	pub chat_id: String,
}

/// Notification channels; each one is used only when enabled
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AlertingConfig {
	#[serde(default)]
	pub slack: SlackConfig,
	#[serde(default)]
	pub discord: DiscordConfig,
	#[serde(default)]
	pub telegram: TelegramConfig,
}
